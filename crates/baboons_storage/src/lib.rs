//! Durable key/value storage for DiscBaboons
//!
//! A small async storage seam with pluggable backends:
//! - [`MemoryStorage`]: process-local map, mainly for tests and previews
//! - [`FileStorage`]: a single JSON object file on disk
//!
//! Backends are consumed through the object-safe [`KeyValueStorage`] trait
//! so higher layers (the theme preference store, and eventually other
//! device-local settings) never depend on a concrete backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use baboons_storage::{KeyValueStorage, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! storage.set_item("discbaboons_theme_preference", "dark").await?;
//! let value = storage.get_item("discbaboons_theme_preference").await?;
//! ```

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

/// Object-safe async key/value storage.
///
/// All operations are fallible: backends may hit quota limits, permission
/// failures, or corrupt on-disk state. Callers that must not fail are
/// expected to absorb [`StorageError`] themselves.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Fetch the value stored under `key`, or `None` when absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
