//! Storage error types

use thiserror::Error;

/// Errors produced by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// On-disk state exists but could not be decoded
    #[error("corrupt storage data: {0}")]
    Corrupt(String),

    /// Backend is not usable right now (quota, permissions, platform)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
