//! Theme resolver state machine
//!
//! [`ThemeStore`] owns the authoritative in-memory theme state: the user's
//! mode (explicit theme or follow-system) and the resolved active theme,
//! which is always concrete. Explicit changes apply synchronously and
//! persist in the background; persistence is advisory for the running
//! session and never rolls visible state back.
//!
//! The store is an explicit handle with `init`/`dispose` lifecycle rather
//! than a process-wide singleton, so each provider (and each test) gets an
//! isolated instance.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::detector::{SchemeSubscription, SystemThemeDetector};
use crate::palette::Palette;
use crate::store::{SaveOutcome, ThemePreferenceStore};
use crate::theme::{ThemeMode, ThemeName};

/// Callback invoked after every visible state change.
///
/// The app layer registers something like `request_redraw` here; consumers
/// then re-read [`ThemeStore::mode`] / [`ThemeStore::palette`] during the
/// next render pass.
pub type ChangeCallback = Box<dyn Fn() + Send + Sync>;

struct ThemeStoreInner {
    mode: RwLock<ThemeMode>,
    resolved: RwLock<ThemeName>,
    initializing: AtomicBool,
    prefs: ThemePreferenceStore,
    detector: SystemThemeDetector,
    subscription: Mutex<Option<SchemeSubscription>>,
    change_callback: Mutex<Option<ChangeCallback>>,
}

impl ThemeStoreInner {
    fn notify(&self) {
        if let Some(cb) = self.change_callback.lock().unwrap().as_ref() {
            cb();
        }
    }

    /// OS notification handler. No suspension points: each notification is
    /// processed to completion before the next one.
    fn on_system_scheme(&self, scheme: ThemeName) {
        {
            let mode = self.mode.read().unwrap();
            if !matches!(*mode, ThemeMode::System) {
                // Explicit choice takes precedence; the report is ignored.
                debug!("system scheme changed to {scheme:?}, ignored (mode={:?})", *mode);
                return;
            }
        }
        debug!("system scheme changed, resolving to {scheme:?}");
        *self.resolved.write().unwrap() = scheme;
        self.notify();
    }
}

/// The theme resolver: authoritative mode + resolved theme, shared by the
/// whole component tree.
///
/// Cloning is cheap and shares state, in the way providers hand a context
/// handle down to consumers.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<ThemeStoreInner>,
}

impl ThemeStore {
    /// Create a store in its pre-init state: mode `System`, resolved
    /// `Light`, `initializing` set. Call [`ThemeStore::init`] at provider
    /// mount to load the persisted preference and wire OS notifications.
    pub fn new(prefs: ThemePreferenceStore, detector: SystemThemeDetector) -> Self {
        Self {
            inner: Arc::new(ThemeStoreInner {
                mode: RwLock::new(ThemeMode::System),
                resolved: RwLock::new(ThemeName::Light),
                initializing: AtomicBool::new(true),
                prefs,
                detector,
                subscription: Mutex::new(None),
                change_callback: Mutex::new(None),
            }),
        }
    }

    /// Load the persisted mode and start tracking the OS scheme.
    ///
    /// A stored value that names no known mode (corrupt or from a newer
    /// build) is treated as absent and falls back to `System`. The OS
    /// subscription is registered at most once per store lifetime, and
    /// only when the platform supports scheme detection.
    pub async fn init(&self) {
        let outcome = self
            .inner
            .prefs
            .load_with_fallback(ThemeMode::SYSTEM_ID)
            .await;

        let mode = outcome.theme.parse::<ThemeMode>().unwrap_or_else(|err| {
            warn!("stored theme {:?} not recognized, following system", err.0);
            ThemeMode::System
        });
        let resolved = self.resolve_mode(mode);

        {
            *self.inner.mode.write().unwrap() = mode;
            *self.inner.resolved.write().unwrap() = resolved;
        }

        if self.inner.detector.is_supported() {
            let mut slot = self.inner.subscription.lock().unwrap();
            if slot.is_none() {
                let weak = Arc::downgrade(&self.inner);
                *slot = Some(self.inner.detector.subscribe(move |scheme| {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_system_scheme(scheme);
                    }
                }));
            }
        }

        self.inner.initializing.store(false, Ordering::SeqCst);
        self.inner.notify();
        debug!("theme store initialized: mode={mode:?} resolved={resolved:?}");
    }

    /// Change the user's theme mode.
    ///
    /// The in-memory mode and resolved theme update synchronously, before
    /// this function returns; consumers reading the store immediately
    /// afterwards see the new state. Persistence runs as a detached task
    /// on the ambient Tokio runtime; its outcome is diagnostic only and a
    /// failure never reverts the in-memory change. The returned handle can
    /// be dropped (fire-and-forget) or awaited to observe the outcome.
    pub fn set_mode(&self, mode: ThemeMode) -> JoinHandle<SaveOutcome> {
        let resolved = self.resolve_mode(mode);
        {
            let mut current_mode = self.inner.mode.write().unwrap();
            let mut current_resolved = self.inner.resolved.write().unwrap();
            debug!(
                "ThemeStore::set_mode - {:?} -> {mode:?} (resolved {resolved:?})",
                *current_mode
            );
            *current_mode = mode;
            *current_resolved = resolved;
        }
        self.inner.notify();

        let prefs = self.inner.prefs.clone();
        tokio::spawn(async move {
            let outcome = prefs.save_with_fallback(mode.id()).await;
            if !outcome.success {
                warn!(
                    "theme persistence failed: {} ({:?})",
                    outcome.message, outcome.error
                );
            }
            outcome
        })
    }

    /// Stop tracking OS notifications. Idempotent; later explicit
    /// `set_mode` calls still work.
    pub fn dispose(&self) {
        if let Some(sub) = self.inner.subscription.lock().unwrap().take() {
            sub.unsubscribe();
        }
    }

    // ========== Consumer read surface ==========

    /// The user's current preference, including the `System` sentinel.
    /// What a settings screen shows as selected.
    pub fn mode(&self) -> ThemeMode {
        *self.inner.mode.read().unwrap()
    }

    /// The concrete theme being rendered right now. Never the sentinel.
    pub fn resolved(&self) -> ThemeName {
        *self.inner.resolved.read().unwrap()
    }

    /// The palette for the resolved theme. What every themed component
    /// reads its colors from.
    pub fn palette(&self) -> Palette {
        self.resolved().palette()
    }

    /// Whether the initial preference load is still in flight.
    pub fn is_initializing(&self) -> bool {
        self.inner.initializing.load(Ordering::SeqCst)
    }

    /// Whether OS scheme notifications are currently wired up.
    pub fn is_tracking_system(&self) -> bool {
        self.inner
            .subscription
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(SchemeSubscription::is_active)
    }

    /// Register the callback invoked after every visible state change.
    pub fn set_change_callback(&self, callback: impl Fn() + Send + Sync + 'static) {
        *self.inner.change_callback.lock().unwrap() = Some(Box::new(callback));
    }

    fn resolve_mode(&self, mode: ThemeMode) -> ThemeName {
        match mode {
            ThemeMode::Named(name) => name,
            // The follow-system branch is inert on platforms without
            // detection; light is the safe concrete stand-in.
            ThemeMode::System => {
                if self.inner.detector.is_supported() {
                    self.inner.detector.current_scheme()
                } else {
                    ThemeName::Light
                }
            }
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode())
            .field("resolved", &self.resolved())
            .field("initializing", &self.is_initializing())
            .finish()
    }
}
