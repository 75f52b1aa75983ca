//! Bounded-step mean-reverting series generator.

use rand::Rng;

use crate::config::{PROCESS, ProcessConfig};
use crate::domain::Bias;

/// Produces the next value of a cosmetic Ornstein-Uhlenbeck style process.
///
/// `next` is a pure function of the previous value, the bias and the noise
/// draw; the caller owns the RNG and the bias.
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    pub mu: f64,
    pub theta: f64,
    pub sigma: f64,
    pub noise_amplitude: f64,
    pub max_step: f64,
    pub bias_weight: f64,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::from_config(&PROCESS)
    }
}

impl SeriesGenerator {
    pub fn from_config(config: &ProcessConfig) -> Self {
        Self {
            mu: config.mu,
            theta: config.theta,
            sigma: config.sigma,
            noise_amplitude: config.noise_amplitude,
            max_step: config.max_step,
            bias_weight: config.bias_weight,
        }
    }

    /// Uniform draw from `[-noise_amplitude, +noise_amplitude]`.
    pub fn draw_noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.noise_amplitude <= 0.0 {
            return 0.0;
        }
        rng.gen_range(-self.noise_amplitude..=self.noise_amplitude)
    }

    pub fn next(&self, x: f64, bias: Bias, noise: f64) -> f64 {
        let step = self.theta * (self.mu - x)
            + self.sigma * noise
            + bias.as_f64() * self.bias_weight;
        x + step.clamp(-self.max_step, self.max_step)
    }

    /// Draws noise from `rng` and steps once.
    pub fn sample<R: Rng + ?Sized>(&self, x: f64, bias: Bias, rng: &mut R) -> f64 {
        let noise = self.draw_noise(rng);
        self.next(x, bias, noise)
    }
}
