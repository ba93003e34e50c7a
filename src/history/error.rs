//! History store error types

use thiserror::Error;

/// Errors that can occur while reading or writing the history file
#[derive(Error, Debug)]
pub enum HistoryError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The history file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;
