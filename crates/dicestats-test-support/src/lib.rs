//! Shared test doubles for the dicestats workspace.

mod rng;

pub use rng::{MockRng, SequenceRng};
