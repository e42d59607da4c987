//! Seeded random stream shared by every stochastic decision in a run
//!
//! All draws go through one `RandomStream` in a fixed order, so the same seed
//! and the same explicit options reproduce the same scene. Adding, removing or
//! reordering a draw anywhere changes every scene generated after it.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source for reproducible stochastic choices
pub struct RandomStream {
    rng: StdRng,
    seed: u64,
}

impl RandomStream {
    /// Create a deterministic stream from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a fresh seed from the operating system backed generator
    pub fn fresh_seed() -> u64 {
        rand::rng().random::<u64>()
    }

    /// The seed this stream was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Next value of the stream, uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform index in `0..len`, or 0 for an empty range
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform value in `low..=high`; returns `low` when the range is inverted
    pub fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Bernoulli draw that succeeds with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform choice from a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index(items.len());
        items.get(index)
    }

    /// Index of a style, palette or candidate chosen in proportion to its weight
    ///
    /// Takes one draw even when every weight is zero, in which case the first
    /// index is returned.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let draw = self.next_f64();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut remaining = draw * total;
        for (index, &weight) in weights.iter().enumerate() {
            remaining -= weight;
            if remaining < 0.0 {
                return index;
            }
        }
        weights.len().saturating_sub(1)
    }
}
