//! Scrolling line geometry, independent of any drawing backend.

use crate::models::ring_buffer::PriceRing;
use crate::utils::maths_utils::lerp;

/// A vertex of the price line: `x` as a fraction of the viewport width
/// (0.0 = left edge, 1.0 = right edge) and the smoothed sample value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineVertex {
    pub x: f64,
    pub value: f64,
}

/// Builds the line's connected segments for sub-step progress `t` in
/// `[0, 1)`.
///
/// Drawing starts at the first position whose smoothing window is full, so a
/// vertex's value never changes when the ring advances underneath it. Every
/// vertex is shifted left by `t` segment widths so the line scrolls
/// continuously between generator steps. The oldest segment is clipped at the
/// left edge, with its value interpolated by `t`.
pub fn line_vertices(ring: &PriceRing, t: f64) -> Vec<LineVertex> {
    let n = ring.len();
    if n < 2 {
        return vec![LineVertex {
            x: 0.0,
            value: ring.smoothed_read(0),
        }];
    }

    let first = (ring.smoothing_window() - 1).min(n - 2);
    let t = t.clamp(0.0, 1.0);
    let segment = 1.0 / (n - 1 - first) as f64;

    let mut vertices = Vec::with_capacity(n - first);
    vertices.push(LineVertex {
        x: 0.0,
        value: lerp(ring.smoothed_read(first), ring.smoothed_read(first + 1), t),
    });
    for i in (first + 1)..n {
        vertices.push(LineVertex {
            x: ((i - first) as f64 - t) * segment,
            value: ring.smoothed_read(i),
        });
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_step_boundary_vertices_match_samples() {
        let ring = PriceRing::from_values(vec![1.0, 2.0, 3.0], 1);
        let v = line_vertices(&ring, 0.0);

        assert_eq!(v.len(), 3);
        assert_eq!(v[0], LineVertex { x: 0.0, value: 1.0 });
        assert_eq!(v[1], LineVertex { x: 0.5, value: 2.0 });
        assert_eq!(v[2], LineVertex { x: 1.0, value: 3.0 });
    }

    #[test]
    fn mid_step_scrolls_left_and_clips_oldest_segment() {
        let ring = PriceRing::from_values(vec![0.0, 10.0, 20.0], 1);
        let v = line_vertices(&ring, 0.5);

        assert_eq!(v[0], LineVertex { x: 0.0, value: 5.0 });
        assert_eq!(v[1], LineVertex { x: 0.25, value: 10.0 });
        assert_eq!(v[2], LineVertex { x: 0.75, value: 20.0 });
    }

    #[test]
    fn uses_smoothed_values_with_full_windows_only() {
        let ring = PriceRing::from_values(vec![0.0, 10.0, 20.0, 30.0], 2);
        let v = line_vertices(&ring, 0.0);

        // Position 0 has no full window and is not drawn
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], LineVertex { x: 0.0, value: 5.0 });
        assert_eq!(v[2], LineVertex { x: 1.0, value: 25.0 });
    }

    #[test]
    fn advancing_keeps_every_vertex_in_place() {
        // Ramp rising 1.5 per sample, smoothed over 5
        let mut ring = PriceRing::from_values((0..20).map(|i| i as f64 * 1.5).collect(), 5);
        let before = line_vertices(&ring, 1.0 - 1e-9);
        ring.advance(20.0 * 1.5);
        let after = line_vertices(&ring, 0.0);

        assert_eq!(before.len(), after.len());
        for i in 0..after.len() - 1 {
            assert!((before[i + 1].x - after[i].x).abs() < 1e-6, "x moved at {}", i);
            assert!(
                (before[i + 1].value - after[i].value).abs() < 1e-6,
                "vertex {} jumps from {} to {}",
                i,
                before[i + 1].value,
                after[i].value
            );
        }
        // The clipped left edge carries on from where it was heading
        assert!((before[0].value - after[0].value).abs() < 1e-6);
    }

    #[test]
    fn x_is_monotonic_for_any_progress() {
        let ring = PriceRing::from_values((0..50).map(f64::from).collect(), 5);
        for step in 0..10 {
            let t = step as f64 / 10.0;
            let v = line_vertices(&ring, t);
            assert_eq!(v.len(), 46);
            assert!(v.windows(2).all(|w| w[0].x <= w[1].x));
            assert!(v.iter().all(|p| (0.0..=1.0).contains(&p.x)));
        }
    }
}
