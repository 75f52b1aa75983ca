//! Y-axis range tracking: a target computed from the data and a displayed
//! range that eases towards it.

use crate::config::{SCALE, ScaleConfig};
use crate::models::ring_buffer::PriceRing;
use crate::utils::maths_utils::{ease_towards, get_min_max};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widens symmetrically around the midpoint so that `span() >= min_span`.
    pub fn with_min_span(self, min_span: f64) -> Self {
        if self.span() >= min_span {
            return self;
        }
        let mid = (self.min + self.max) / 2.0;
        Self::new(mid - min_span / 2.0, mid + min_span / 2.0)
    }

    /// Fraction of the way from `min` (0.0) to `max` (1.0).
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

#[derive(Debug, Clone)]
pub struct ScaleTracker {
    target: Bounds,
    current: Bounds,
    pad_fraction: f64,
    min_pad: f64,
    smooth_rate: f64,
    max_delta: f64,
    min_span: f64,
}

impl ScaleTracker {
    /// Starts with both target and displayed range fitted to `ring`.
    pub fn new(ring: &PriceRing) -> Self {
        Self::with_config(ring, &SCALE)
    }

    pub fn with_config(ring: &PriceRing, config: &ScaleConfig) -> Self {
        let mut tracker = Self {
            target: Bounds::new(0.0, config.min_span),
            current: Bounds::new(0.0, config.min_span),
            pad_fraction: config.pad_fraction,
            min_pad: config.min_pad,
            smooth_rate: config.smooth_rate,
            max_delta: config.max_delta_per_frame,
            min_span: config.min_span,
        };
        tracker.snap_to(ring);
        tracker
    }

    pub fn target(&self) -> Bounds {
        self.target
    }

    pub fn current(&self) -> Bounds {
        self.current
    }

    /// Fits the target to the extremes of `ring` plus padding.
    pub fn recompute_target(&mut self, ring: &PriceRing) {
        let (mut min, mut max) = get_min_max(ring.as_slice());
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        let pad = ((max - min) * self.pad_fraction).max(self.min_pad);
        self.target = Bounds::new(min - pad, max + pad);
    }

    /// One frame of easing, each bound independently, rate-limited.
    pub fn tick(&mut self) {
        let min = ease_towards(
            self.current.min,
            self.target.min,
            self.smooth_rate,
            self.max_delta,
        );
        let max = ease_towards(
            self.current.max,
            self.target.max,
            self.smooth_rate,
            self.max_delta,
        );
        self.current = Bounds::new(min, max).with_min_span(self.min_span);
    }

    /// Jumps the displayed range straight to a freshly computed target.
    pub fn snap_to(&mut self, ring: &PriceRing) {
        self.recompute_target(ring);
        self.current = self.target.with_min_span(self.min_span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::SeriesGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ring(values: &[f64]) -> PriceRing {
        PriceRing::from_values(values.to_vec(), 1)
    }

    #[test]
    fn target_is_padded_extremes() {
        let tracker = ScaleTracker::new(&ring(&[90.0, 110.0, 100.0]));
        let pad = (20.0 * SCALE.pad_fraction).max(SCALE.min_pad);
        assert_eq!(tracker.target(), Bounds::new(90.0 - pad, 110.0 + pad));
    }

    #[test]
    fn flat_data_gets_widened_before_padding() {
        let tracker = ScaleTracker::new(&ring(&[50.0; 8]));
        let target = tracker.target();
        // widened to 49..51 then padded by max(0.5, 2 * pad_fraction)
        let pad = (2.0 * SCALE.pad_fraction).max(SCALE.min_pad);
        assert_eq!(target, Bounds::new(49.0 - pad, 51.0 + pad));
        assert!(target.span() >= 1.0);
    }

    #[test]
    fn tick_moves_at_most_max_delta() {
        let mut tracker = ScaleTracker::new(&ring(&[0.0, 1.0]));
        let before = tracker.current();

        tracker.recompute_target(&ring(&[1_000.0, 2_000.0]));
        tracker.tick();
        let after = tracker.current();

        assert!((after.min - before.min).abs() <= SCALE.max_delta_per_frame + 1e-12);
        assert!((after.max - before.max).abs() <= SCALE.max_delta_per_frame + 1e-12);
        assert!(after.max > before.max);
    }

    #[test]
    fn tick_converges_on_target() {
        let mut tracker = ScaleTracker::new(&ring(&[0.0, 10.0]));
        tracker.recompute_target(&ring(&[20.0, 30.0]));
        for _ in 0..2_000 {
            tracker.tick();
        }
        let (current, target) = (tracker.current(), tracker.target());
        assert!((current.min - target.min).abs() < 1e-6);
        assert!((current.max - target.max).abs() < 1e-6);
    }

    #[test]
    fn span_never_drops_below_one() {
        let generator = SeriesGenerator::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut data = PriceRing::seeded(32, 5, &generator, &mut rng);
        let mut tracker = ScaleTracker::new(&data);

        for frame in 0..3_000 {
            // alternate between wild data and a flat line
            let next = if frame % 400 < 200 {
                generator.sample(data.newest(), crate::domain::Bias::Up, &mut rng)
            } else {
                data.newest()
            };
            data.advance(next);
            tracker.recompute_target(&data);
            tracker.tick();
            assert!(tracker.current().span() >= 1.0);
            assert!(tracker.target().span() >= 1.0);
        }
    }

    #[test]
    fn narrow_target_keeps_min_span() {
        let mut tracker = ScaleTracker::new(&ring(&[0.0, 100.0]));
        tracker.recompute_target(&ring(&[500.0, 500.5]));
        tracker.tick();
        assert!(tracker.current().span() >= 1.0);
    }

    #[test]
    fn snap_skips_easing() {
        let mut tracker = ScaleTracker::new(&ring(&[0.0, 1.0]));
        let far = ring(&[500.0, 520.0]);
        tracker.snap_to(&far);
        assert_eq!(tracker.current(), tracker.target());
    }

    #[test]
    fn normalize_maps_bounds_to_unit_range() {
        let b = Bounds::new(10.0, 20.0);
        assert_eq!(b.normalize(10.0), 0.0);
        assert_eq!(b.normalize(20.0), 1.0);
        assert_eq!(b.normalize(15.0), 0.5);
    }
}
