//! In-memory storage backend

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::{KeyValueStorage, StorageError};

/// Process-local key/value storage.
///
/// Nothing survives the process; useful for tests, previews, and as a
/// stand-in on platforms where no durable backend is wired up yet.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove_round_trip() {
        let storage = MemoryStorage::new();

        storage.set_item("k", "v").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap(), Some("v".to_string()));

        storage.remove_item("k").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let storage = MemoryStorage::new();

        storage.set_item("k", "a").await.unwrap();
        storage.set_item("k", "b").await.unwrap();

        assert_eq!(storage.get_item("k").await.unwrap(), Some("b".to_string()));
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn removing_absent_key_succeeds() {
        let storage = MemoryStorage::new();
        storage.remove_item("missing").await.unwrap();
    }
}
