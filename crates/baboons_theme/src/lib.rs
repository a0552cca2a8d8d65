//! DiscBaboons theming engine
//!
//! Decides which visual theme is active at any moment, reconciles the
//! user's explicit choice against the live OS color scheme, persists that
//! choice durably, and propagates changes synchronously to every themed
//! consumer, tolerating broken storage and missing platform capabilities
//! without ever failing into the render path.
//!
//! # Overview
//!
//! - [`ThemeName`] / [`Palette`]: the three concrete themes (light, dark,
//!   blackout) and their color tables
//! - [`ThemeMode`]: the durable preference, either a concrete theme or the
//!   `system` sentinel
//! - [`SystemThemeDetector`]: never-failing wrapper over the platform's
//!   appearance API
//! - [`ThemePreferenceStore`]: two-tier persistence (strict + fallback)
//!   over one storage key
//! - [`ThemeStore`]: the resolver holding the authoritative mode and
//!   resolved theme, with `init`/`dispose` lifecycle bound to the provider
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use baboons_storage::FileStorage;
//! use baboons_theme::{
//!     SystemThemeDetector, ThemeMode, ThemeName, ThemePreferenceStore, ThemeStore,
//! };
//!
//! let prefs = ThemePreferenceStore::new(Arc::new(FileStorage::new("prefs.json")));
//! let store = ThemeStore::new(prefs, SystemThemeDetector::unsupported());
//! store.init().await;
//!
//! // Reads are synchronous; this is what themed components consume.
//! let colors = store.palette();
//!
//! // Mode changes apply immediately; persistence happens in the background.
//! store.set_mode(ThemeMode::Named(ThemeName::Blackout));
//! assert_eq!(store.resolved(), ThemeName::Blackout);
//! ```
//!
//! # Guarantees
//!
//! - The resolved theme is always concrete: every color lookup hits a real
//!   palette, regardless of stored garbage or platform failures.
//! - An explicit mode change is visible to consumers before any I/O runs,
//!   and a storage failure never reverts it.
//! - While following the system, OS scheme changes drive the resolved
//!   theme in emission order; an explicit choice makes them inert.

pub mod color;
pub mod detector;
pub mod error;
pub mod palette;
pub mod state;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use color::Color;
pub use detector::{
    AppearanceError, AppearanceSource, CancelFn, OsColorScheme, OsSchemeListener,
    SchemeSubscription, StaticAppearance, SystemThemeDetector, UnsupportedAppearance,
};
pub use error::ThemeStoreError;
pub use palette::{palette, Palette};
pub use state::ThemeStore;
pub use store::{
    LoadOutcome, LoadSource, SaveOutcome, ThemePreferenceStore, THEME_PREFERENCE_KEY,
};
pub use theme::{ThemeMode, ThemeName, UnknownTheme};
