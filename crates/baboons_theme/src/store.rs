//! Durable theme preference, two API tiers over one storage key.
//!
//! The strict tier (`save`/`load`/`clear`) gives programmatic callers a
//! synchronous validation signal. The fallback tier
//! (`save_with_fallback`/`load_with_fallback`) is what the resolver uses:
//! it never fails, always hands back a usable theme id, and reports what
//! actually happened in a structured outcome instead of an error. First
//! paint must never be blocked on a broken storage backend.

use std::sync::Arc;

use baboons_storage::KeyValueStorage;
use tracing::{debug, warn};

use crate::error::ThemeStoreError;
use crate::theme::ThemeMode;

/// The single durable slot for the theme preference.
pub const THEME_PREFERENCE_KEY: &str = "discbaboons_theme_preference";

/// Where the theme id in a [`LoadOutcome`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    /// A value was present in storage
    Storage,
    /// Nothing stored (or storage failed); the caller's fallback was used
    Fallback,
    /// The caller's fallback was itself unusable; hardcoded default
    Default,
}

/// Result of a fallback-tier save. Never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    /// The theme the caller should keep in memory. On a storage failure
    /// this still echoes the requested value; only invalid input clears it.
    pub theme: Option<String>,
    pub message: &'static str,
    pub error: Option<String>,
}

/// Result of a fallback-tier load. Never an error, always a usable theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    pub success: bool,
    pub theme: String,
    pub source: LoadSource,
    pub message: &'static str,
    pub error: Option<String>,
}

/// Persistence of the user's theme preference.
#[derive(Clone)]
pub struct ThemePreferenceStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemePreferenceStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    // ========== Strict tier ==========

    /// Persist a theme id. Fails on empty input or a storage write error.
    pub async fn save(&self, mode: &str) -> Result<(), ThemeStoreError> {
        let mode = validated(mode)?;
        self.storage.set_item(THEME_PREFERENCE_KEY, mode).await?;
        debug!("stored theme preference {mode:?}");
        Ok(())
    }

    /// Read the stored theme id, or `None` when nothing usable is stored.
    ///
    /// Read failures resolve to `None` rather than an error: failure to
    /// read must not block first paint.
    pub async fn load(&self) -> Option<String> {
        match self.storage.get_item(THEME_PREFERENCE_KEY).await {
            Ok(value) => value,
            Err(err) => {
                warn!("theme preference read failed: {err}");
                None
            }
        }
    }

    /// Remove the stored preference. Returns whether removal succeeded.
    pub async fn clear(&self) -> bool {
        match self.storage.remove_item(THEME_PREFERENCE_KEY).await {
            Ok(()) => true,
            Err(err) => {
                warn!("theme preference clear failed: {err}");
                false
            }
        }
    }

    // ========== Fallback tier ==========

    /// Persist a theme id without ever failing.
    ///
    /// On a storage failure the outcome still carries the requested theme
    /// so the caller can keep it in memory; the diagnostic fields say what
    /// went wrong.
    pub async fn save_with_fallback(&self, mode: &str) -> SaveOutcome {
        let mode = match validated(mode) {
            Ok(mode) => mode,
            Err(err) => {
                return SaveOutcome {
                    success: false,
                    theme: None,
                    message: "Invalid theme provided",
                    error: Some(err.to_string()),
                }
            }
        };

        match self.storage.set_item(THEME_PREFERENCE_KEY, mode).await {
            Ok(()) => SaveOutcome {
                success: true,
                theme: Some(mode.to_string()),
                message: "Theme stored successfully",
                error: None,
            },
            Err(err) => {
                warn!("theme preference write failed, keeping in-memory value: {err}");
                SaveOutcome {
                    success: false,
                    theme: Some(mode.to_string()),
                    message: "Theme changed in memory only - storage failed",
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Read the stored theme id, falling back to `fallback`, and to the
    /// hardcoded `"system"` default when the fallback itself is unusable.
    pub async fn load_with_fallback(&self, fallback: &str) -> LoadOutcome {
        match self.storage.get_item(THEME_PREFERENCE_KEY).await {
            Ok(Some(value)) => LoadOutcome {
                success: true,
                theme: value,
                source: LoadSource::Storage,
                message: "Theme retrieved from storage",
                error: None,
            },
            Ok(None) => match validated(fallback) {
                Ok(fallback) => LoadOutcome {
                    success: true,
                    theme: fallback.to_string(),
                    source: LoadSource::Fallback,
                    message: "No stored theme found, using fallback",
                    error: None,
                },
                Err(_) => invalid_fallback_outcome(),
            },
            Err(err) => {
                warn!("theme preference read failed, using fallback: {err}");
                match validated(fallback) {
                    Ok(fallback) => LoadOutcome {
                        success: false,
                        theme: fallback.to_string(),
                        source: LoadSource::Fallback,
                        message: "Using fallback theme due to storage error",
                        error: Some(err.to_string()),
                    },
                    Err(_) => invalid_fallback_outcome(),
                }
            }
        }
    }
}

impl std::fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("key", &THEME_PREFERENCE_KEY)
            .finish()
    }
}

fn validated(mode: &str) -> Result<&str, ThemeStoreError> {
    let trimmed = mode.trim();
    if trimmed.is_empty() {
        return Err(ThemeStoreError::EmptyTheme);
    }
    Ok(trimmed)
}

fn invalid_fallback_outcome() -> LoadOutcome {
    LoadOutcome {
        success: false,
        theme: ThemeMode::SYSTEM_ID.to_string(),
        source: LoadSource::Default,
        message: "Invalid fallback provided, using system default",
        error: Some("Fallback theme cannot be empty".to_string()),
    }
}
