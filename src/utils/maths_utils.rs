use argminmax::ArgMinMax;

/// Smallest and largest value in one pass. `vec` must not be empty.
pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    let (min_index, max_index) = vec.argminmax();
    (vec[min_index], vec[max_index])
}

/// Linear interpolation between `a` (t = 0) and `b` (t = 1).
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Moves `current` towards `target` by `rate` of the gap, but never by more
/// than `max_delta` in absolute terms.
#[inline]
pub fn ease_towards(current: f64, target: f64, rate: f64, max_delta: f64) -> f64 {
    let step = ((target - current) * rate).clamp(-max_delta, max_delta);
    current + step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_in_one_pass() {
        let data = [3.0, -2.5, 8.0, 8.0, 0.0];
        assert_eq!(get_min_max(&data), (-2.5, 8.0));
    }

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }

    #[test]
    fn ease_is_rate_limited() {
        // 10% of 100 = 10, capped at 0.5
        assert_eq!(ease_towards(0.0, 100.0, 0.1, 0.5), 0.5);
        assert_eq!(ease_towards(0.0, -100.0, 0.1, 0.5), -0.5);
        // Small gaps ease proportionally
        assert!((ease_towards(0.0, 1.0, 0.1, 0.5) - 0.1).abs() < 1e-12);
    }
}
