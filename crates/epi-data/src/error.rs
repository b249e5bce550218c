//! Error types for data ingestion.

use std::path::PathBuf;

use epi_core::SignalError;
use thiserror::Error;

/// Result type alias for ingestion operations.
pub type Result<T> = core::result::Result<T, DataError>;

/// Errors raised while reading or writing county data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Filesystem failure on a specific path.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed or unwritable JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date key that is not `YYYY-MM-DD`.
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        /// The offending key.
        value: String,
        /// Parser error.
        #[source]
        source: chrono::ParseError,
    },

    /// Series construction failed.
    #[error(transparent)]
    Signal(#[from] SignalError),
}

impl DataError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
