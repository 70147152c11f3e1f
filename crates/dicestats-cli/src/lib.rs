//! Command-line front ends for the dicestats enumerator and sampler.
//!
//! The binaries in `src/bin` are thin wrappers; argument parsing, input
//! resolution and report selection live here so they can be tested
//! without spawning processes.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod telemetry;
