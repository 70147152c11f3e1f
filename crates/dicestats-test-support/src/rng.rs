//! Scripted `DeterministicRng` implementations for tests.

use dicestats_core::rng::DeterministicRng;

/// An RNG that always returns `min`. Every two-dice draw it feeds comes out
/// as snake eyes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, ignoring the
/// requested range. Panics if the sequence is exhausted. Used in tests that
/// need specific die faces, or deliberately out-of-range ones.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Builds the sequence that replays `rolls` as (die 1, die 2) pairs.
    #[must_use]
    pub fn from_rolls(rolls: &[(u32, u32)]) -> Self {
        Self::new(rolls.iter().flat_map(|&(d1, d2)| [d1, d2]).collect())
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
