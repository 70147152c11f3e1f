//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DiceError {
    /// A value violated a domain rule (die face out of range, too many draws).
    #[error("validation error: {0}")]
    Validation(String),

    /// A sampler operation was called in the wrong phase.
    #[error("sampler must be in {expected} phase, found {actual}")]
    InvalidPhase {
        /// The phase the operation requires.
        expected: &'static str,
        /// The phase the sampler was actually in.
        actual: &'static str,
    },

    /// Writing a table to the output stream failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding a report as JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
