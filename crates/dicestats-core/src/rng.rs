//! Random number generator abstraction for determinism.
//!
//! The sampler never touches process-wide generator state. It is handed an
//! owned generator, seeded once, so that a given seed always reproduces the
//! same sequence of draws. Tests inject scripted implementations instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    /// Creates a generator whose sequence is fully determined by `seed`.
    ///
    /// Negative seeds are reinterpreted bit-for-bit as `u64`, so every
    /// distinct `i64` maps to a distinct stream.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_seed(seed: i64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed as u64),
        }
    }
}

impl DeterministicRng for SeededRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.inner.random_range(min..=max)
    }
}
