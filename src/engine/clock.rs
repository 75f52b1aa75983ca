#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::GRAPH;

/// Result of advancing the clock by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAdvance {
    /// Discrete generator steps due this frame
    pub steps: usize,
    /// Sub-step progress in `[0, 1)` used for interpolation (0 when paused)
    pub t: f64,
}

/// Decouples the render frame rate from the logical sample rate.
#[derive(Debug, Clone)]
pub struct StepClock {
    accumulator: f64,
    step_period: f64,
    max_steps: usize,
    dropped_steps: usize,
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(GRAPH.step_period_sec, GRAPH.max_catch_up_steps)
    }
}

impl StepClock {
    pub fn new(step_period: f64, max_steps: usize) -> Self {
        assert!(step_period > 0.0, "step period must be positive");
        Self {
            accumulator: 0.0,
            step_period,
            max_steps: max_steps.max(1),
            dropped_steps: 0,
        }
    }

    pub fn advance(&mut self, dt: f64, paused: bool) -> FrameAdvance {
        if paused {
            return FrameAdvance { steps: 0, t: 0.0 };
        }

        self.accumulator += dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step_period {
            self.accumulator -= self.step_period;
            steps += 1;
        }

        if steps > self.max_steps {
            let dropped = steps - self.max_steps;
            self.dropped_steps += dropped;
            steps = self.max_steps;

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_frame_catch_up {
                log::debug!("Frame catch-up capped, dropped {} steps", dropped);
            }
        }

        FrameAdvance {
            steps,
            t: self.accumulator / self.step_period,
        }
    }

    /// Total steps discarded by the catch-up cap since creation.
    pub fn dropped_steps(&self) -> usize {
        self.dropped_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_fractional_frames() {
        let mut clock = StepClock::new(0.1, 100);

        let a = clock.advance(0.04, false);
        assert_eq!(a.steps, 0);
        assert!((a.t - 0.4).abs() < 1e-9);

        let b = clock.advance(0.08, false);
        assert_eq!(b.steps, 1);
        assert!((b.t - 0.2).abs() < 1e-9);
    }

    #[test]
    fn slow_frame_catches_up_with_several_steps() {
        let mut clock = StepClock::new(0.1, 100);
        let a = clock.advance(0.35, false);
        assert_eq!(a.steps, 3);
        assert!((a.t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn paused_clock_freezes_with_zero_progress() {
        let mut clock = StepClock::new(0.1, 100);
        clock.advance(0.05, false);

        let paused = clock.advance(10.0, true);
        assert_eq!(paused, FrameAdvance { steps: 0, t: 0.0 });

        // The partial step accumulated before the pause is kept
        let resumed = clock.advance(0.05, false);
        assert_eq!(resumed.steps, 1);
    }

    #[test]
    fn catch_up_is_capped() {
        let mut clock = StepClock::new(0.1, 5);
        let a = clock.advance(60.0, false);
        assert_eq!(a.steps, 5);
        assert!(clock.dropped_steps() > 500);
        assert!(a.t < 1.0);
    }
}
