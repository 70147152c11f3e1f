//! Command-line arguments for both binaries.
//!
//! clap rejects malformed command lines itself, exiting with status 2.
//! Roll count and seed stay strings here so `config` can validate them and
//! name the one that failed.

use clap::Parser;

/// Environment variable holding the roll count.
pub const ROLLS_ENV: &str = "DICE_ROLLS";

/// Environment variable holding the seed.
pub const SEED_ENV: &str = "DICE_SEED";

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated console tables.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Prints every (die 1, die 2, sum) outcome of two six-sided dice, then the
/// frequency and probability of each sum from 2 to 12.
#[derive(Parser, Debug)]
#[command(name = "dice-enumerate", version, about, long_about = None)]
pub struct EnumerateArgs {
    /// Print one JSON report instead of tab-separated tables
    #[arg(long)]
    pub json: bool,
}

impl EnumerateArgs {
    /// Requested output format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }
}

/// Rolls two six-sided dice ROLLS times from a generator seeded with SEED,
/// printing each roll and then the frequency and probability of each sum.
/// Values not given as arguments or environment variables are prompted for.
#[derive(Parser, Debug)]
#[command(name = "dice-sample", version, about, long_about = None)]
pub struct SampleArgs {
    /// Print one JSON report instead of tab-separated tables
    #[arg(long)]
    pub json: bool,

    /// Number of rolls (non-negative integer)
    #[arg(env = ROLLS_ENV, allow_negative_numbers = true)]
    pub rolls: Option<String>,

    /// Pseudo-random generator seed (any 64-bit integer)
    #[arg(env = SEED_ENV, allow_negative_numbers = true)]
    pub seed: Option<String>,
}

impl SampleArgs {
    /// Requested output format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }
}
