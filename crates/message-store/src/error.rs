//! Error types for the message store.

use thiserror::Error;

/// Errors from the message log store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is missing or unreadable.
    #[error("failed to read message log: {0}")]
    Read(#[source] std::io::Error),

    /// The backing file could not be rewritten.
    #[error("failed to write message log: {0}")]
    Write(#[source] std::io::Error),

    /// The backing file does not contain a valid JSON array of records.
    #[error("malformed message log: {0}")]
    Malformed(#[from] serde_json::Error),
}
