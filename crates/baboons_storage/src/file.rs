//! File-backed storage backend
//!
//! All entries live in a single JSON object file. The file is small (a
//! handful of device-local preferences), so each mutation re-reads and
//! rewrites the whole object rather than maintaining an on-disk index.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{KeyValueStorage, StorageError};

/// Durable key/value storage backed by one JSON file.
///
/// A missing file reads as an empty store. Writes go through a sibling
/// temp file followed by a rename, so a crash mid-write leaves the
/// previous contents intact.
pub struct FileStorage {
    path: PathBuf,
    /// Serializes read-modify-write cycles; the filesystem alone gives no
    /// ordering guarantee between concurrent mutations.
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("storage file {:?} not found, reading as empty", self.path);
                return Ok(Map::new());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StorageError::Corrupt(format!(
                "expected a JSON object, found {other}"
            ))),
            Err(err) => Err(StorageError::Corrupt(err.to_string())),
        }
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|err| StorageError::Corrupt(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries).await
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries().await?;
        match entries.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(StorageError::Corrupt(format!(
                "entry for {key:?} is not a string: {other}"
            ))),
        }
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
