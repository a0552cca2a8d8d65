//! Shared test doubles: a scriptable appearance backend and storage
//! backends that fail or record on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use baboons_storage::{KeyValueStorage, StorageError};
use baboons_theme::{AppearanceError, AppearanceSource, CancelFn, OsColorScheme, OsSchemeListener};

type ListenerSlot = Arc<Mutex<Vec<(u64, OsSchemeListener)>>>;

/// Scriptable stand-in for the OS appearance API.
///
/// Tests hold an `Arc<MockAppearance>` both as the detector's source and
/// as a control handle to flip schemes and fire notifications.
pub struct MockAppearance {
    scheme: RwLock<Option<OsColorScheme>>,
    supported: RwLock<bool>,
    fail_subscribe: RwLock<bool>,
    listeners: ListenerSlot,
    next_listener_id: AtomicU64,
    query_count: AtomicUsize,
}

impl Default for MockAppearance {
    fn default() -> Self {
        Self {
            scheme: RwLock::new(Some(OsColorScheme::Light)),
            supported: RwLock::new(true),
            fail_subscribe: RwLock::new(false),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener_id: AtomicU64::new(0),
            query_count: AtomicUsize::new(0),
        }
    }
}

#[allow(dead_code)]
impl MockAppearance {
    pub fn reporting(scheme: OsColorScheme) -> Arc<Self> {
        let mock = Self::default();
        *mock.scheme.write().unwrap() = Some(scheme);
        Arc::new(mock)
    }

    pub fn unsupported() -> Arc<Self> {
        let mock = Self::default();
        *mock.supported.write().unwrap() = false;
        Arc::new(mock)
    }

    pub fn set_supported(&self, supported: bool) {
        *self.supported.write().unwrap() = supported;
    }

    pub fn set_fail_subscribe(&self, fail: bool) {
        *self.fail_subscribe.write().unwrap() = fail;
    }

    /// Change the reported scheme and notify every registered listener,
    /// the way the OS delivers appearance changes.
    pub fn emit(&self, scheme: Option<OsColorScheme>) {
        *self.scheme.write().unwrap() = scheme;
        let listeners = self.listeners.lock().unwrap();
        for (_, listener) in listeners.iter() {
            listener(scheme);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// How many times `color_scheme` has been queried.
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }
}

impl AppearanceSource for MockAppearance {
    fn color_scheme(&self) -> Result<Option<OsColorScheme>, AppearanceError> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        Ok(*self.scheme.read().unwrap())
    }

    fn supports_color_scheme(&self) -> Result<bool, AppearanceError> {
        Ok(*self.supported.read().unwrap())
    }

    fn subscribe(&self, listener: OsSchemeListener) -> Result<CancelFn, AppearanceError> {
        if *self.fail_subscribe.read().unwrap() {
            return Err(AppearanceError::Failed("listener setup failed".into()));
        }

        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().unwrap().push((id, listener));

        let listeners = Arc::clone(&self.listeners);
        Ok(Box::new(move || {
            listeners.lock().unwrap().retain(|(lid, _)| *lid != id);
        }))
    }
}

/// Storage whose every operation fails with the given reason.
pub struct FailingStorage {
    reason: String,
}

#[allow(dead_code)]
impl FailingStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl KeyValueStorage for FailingStorage {
    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

/// Working storage that additionally logs every written value, so tests
/// can assert on persistence traffic rather than just the final state.
#[derive(Default)]
pub struct RecordingStorage {
    entries: RwLock<HashMap<String, String>>,
    writes: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_values(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyValueStorage for RecordingStorage {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.lock().unwrap().push(value.to_string());
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
