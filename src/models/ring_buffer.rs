//! Fixed-capacity ring of samples with positional, optionally smoothed reads.

use rand::Rng;

use crate::domain::Bias;
use crate::models::series::SeriesGenerator;

/// Always holds exactly `len()` samples. Logical position 0 is the oldest,
/// `len() - 1` the newest. Advancing never reallocates.
#[derive(Debug, Clone)]
pub struct PriceRing {
    values: Vec<f64>,
    /// Physical index of the oldest sample
    head: usize,
    smoothing_window: usize,
}

impl PriceRing {
    /// Fills the ring by stepping `generator` `capacity` times from its mean.
    pub fn seeded<R: Rng + ?Sized>(
        capacity: usize,
        smoothing_window: usize,
        generator: &SeriesGenerator,
        rng: &mut R,
    ) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");

        let mut values = Vec::with_capacity(capacity);
        let mut x = generator.mu;
        for _ in 0..capacity {
            x = generator.sample(x, Bias::Neutral, rng);
            values.push(x);
        }
        Self::from_values(values, smoothing_window)
    }

    /// Wraps pre-computed samples, oldest first.
    pub fn from_values(values: Vec<f64>, smoothing_window: usize) -> Self {
        assert!(!values.is_empty(), "ring capacity must be non-zero");
        Self {
            values,
            head: 0,
            smoothing_window: smoothing_window.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn smoothing_window(&self) -> usize {
        self.smoothing_window
    }

    #[inline]
    pub fn read(&self, i: usize) -> f64 {
        debug_assert!(i < self.len());
        self.values[(self.head + i) % self.len()]
    }

    pub fn newest(&self) -> f64 {
        self.read(self.len() - 1)
    }

    /// Drops the oldest sample and appends `next_value` as the newest.
    pub fn advance(&mut self, next_value: f64) {
        self.values[self.head] = next_value;
        self.head = (self.head + 1) % self.len();
    }

    /// Mean of the `smoothing_window` samples ending at `i`. Near the oldest
    /// end fewer samples exist and the mean covers only those.
    pub fn smoothed_read(&self, i: usize) -> f64 {
        let start = (i + 1).saturating_sub(self.smoothing_window);
        let count = i + 1 - start;
        let sum: f64 = (start..=i).map(|j| self.read(j)).sum();
        sum / count as f64
    }

    /// Raw storage in physical order. Useful for order-independent scans
    /// such as extremes.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.read(i))
    }
}
