//! Error types and exit codes for the command-line front ends.

use std::process::ExitCode;

use dicestats_core::error::DiceError;
use thiserror::Error;

/// Failures surfaced by the command-line front ends.
#[derive(Debug, Error)]
pub enum AppError {
    /// A roll count or seed was missing, not an integer, or out of range.
    #[error("invalid {input}: {reason}")]
    Input {
        /// Which input failed (`roll count` or `seed`).
        input: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The tabulation run failed.
    #[error(transparent)]
    Domain(#[from] DiceError),

    /// Reading input or writing prompts failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error: 2 for bad input, 1 otherwise.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Input { .. } => 2,
            Self::Domain(_) | Self::Io(_) => 1,
        }
    }

    /// `exit_status` as an `ExitCode` for `main`.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
