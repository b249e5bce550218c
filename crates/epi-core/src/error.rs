//! Error types for signal operations.
//!
//! Every operation in this crate is a deterministic computation over in-memory
//! data, so there is no retry policy: an error always means the caller passed
//! something that violates a precondition.

use thiserror::Error;

/// Result type alias for signal operations that may fail.
pub type Result<T> = core::result::Result<T, SignalError>;

/// Errors that can occur while building or transforming time series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// Domain and range sizes disagree.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Length required by the domain.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A parameter is outside its valid range.
    #[error("Invalid argument '{name}': {value} (expected {expected})")]
    InvalidArgument {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },
}

impl SignalError {
    /// Create an [`SignalError::InvalidArgument`] from any displayable value.
    #[must_use]
    pub fn invalid_argument(
        name: &'static str,
        value: impl core::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
            expected,
        }
    }

    /// Check two lengths, returning [`SignalError::LengthMismatch`] if they differ.
    pub fn check_length(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, actual })
        }
    }
}
