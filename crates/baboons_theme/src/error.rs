//! Theme engine error types

use baboons_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the strict tier of the preference store.
///
/// Nothing above that tier ever sees these: the fallback tier and the
/// resolver absorb them into structured outcomes and safe defaults.
#[derive(Debug, Error)]
pub enum ThemeStoreError {
    /// Caller passed an empty (after trimming) theme id
    #[error("Theme cannot be empty")]
    EmptyTheme,

    /// The storage backend rejected the write
    #[error("Failed to store theme preference: {0}")]
    Storage(#[from] StorageError),
}
