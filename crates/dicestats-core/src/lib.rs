//! dicestats core: two-dice sum tabulation.
//!
//! Two procedures fill the same 11-bucket sum frequency table. The
//! enumerator walks all 36 ordered outcomes; the sampler draws N rolls
//! from a seeded generator. Both stream their rolls and final summary to
//! a `ReportSink`. This crate does no console or environment I/O of its
//! own.

pub mod enumerator;
pub mod error;
pub mod frequency;
pub mod report;
pub mod rng;
pub mod roll;
pub mod sampler;
