//! Durable storage error types.

use thiserror::Error;

/// Durable storage error variants.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage location unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {message}")]
    ReadFailed { key: String, message: String },

    #[error("failed to write `{key}`: {message}")]
    WriteFailed { key: String, message: String },

    #[error("failed to remove `{key}`: {message}")]
    RemoveFailed { key: String, message: String },

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),
}
