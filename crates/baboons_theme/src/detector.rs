//! System color-scheme detection
//!
//! Wraps whatever the platform exposes (an [`AppearanceSource`]) behind a
//! surface that never fails: a missing or broken OS API degrades to the
//! light theme and an inert subscription instead of propagating errors
//! into the render path.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::warn;

use crate::theme::ThemeName;

/// The OS color-scheme vocabulary.
///
/// Deliberately smaller than [`ThemeName`]: no OS reports "blackout", and
/// the `system` sentinel never appears here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OsColorScheme {
    Light,
    Dark,
}

impl OsColorScheme {
    /// The concrete theme this OS report maps to.
    pub fn theme(self) -> ThemeName {
        match self {
            Self::Light => ThemeName::Light,
            Self::Dark => ThemeName::Dark,
        }
    }
}

/// Failures raised by a platform appearance backend.
#[derive(Debug, Error)]
pub enum AppearanceError {
    /// The capability does not exist on this platform/build
    #[error("appearance API unavailable: {0}")]
    Unavailable(String),

    /// The capability exists but the call failed
    #[error("appearance API failed: {0}")]
    Failed(String),
}

/// Listener invoked with the raw OS report (`None` when the OS clears it).
pub type OsSchemeListener = Box<dyn Fn(Option<OsColorScheme>) + Send + Sync>;

/// Cancels a previously registered OS listener.
pub type CancelFn = Box<dyn FnOnce() + Send>;

/// Platform collaborator: the OS-level appearance API.
///
/// Implementations are allowed to fail anywhere; [`SystemThemeDetector`]
/// is the layer that absorbs those failures.
pub trait AppearanceSource: Send + Sync {
    /// Current OS scheme, or `None` when the OS does not expose one.
    fn color_scheme(&self) -> Result<Option<OsColorScheme>, AppearanceError>;

    /// Whether the scheme capability exists on this platform.
    fn supports_color_scheme(&self) -> Result<bool, AppearanceError>;

    /// Register for scheme-change notifications.
    fn subscribe(&self, listener: OsSchemeListener) -> Result<CancelFn, AppearanceError>;
}

/// An appearance backend for platforms without scheme detection.
///
/// Everything reports "unsupported"; the detector then leaves the
/// follow-system branch inert while explicit selection keeps working.
#[derive(Debug, Default)]
pub struct UnsupportedAppearance;

impl AppearanceSource for UnsupportedAppearance {
    fn color_scheme(&self) -> Result<Option<OsColorScheme>, AppearanceError> {
        Err(AppearanceError::Unavailable(
            "no appearance backend on this platform".into(),
        ))
    }

    fn supports_color_scheme(&self) -> Result<bool, AppearanceError> {
        Ok(false)
    }

    fn subscribe(&self, _listener: OsSchemeListener) -> Result<CancelFn, AppearanceError> {
        Err(AppearanceError::Unavailable(
            "no appearance backend on this platform".into(),
        ))
    }
}

/// An appearance backend pinned to one scheme.
///
/// Supported but silent: it never emits change notifications. Useful for
/// demos and environments where the scheme is configured, not detected.
#[derive(Debug)]
pub struct StaticAppearance {
    scheme: Option<OsColorScheme>,
}

impl StaticAppearance {
    pub fn new(scheme: OsColorScheme) -> Self {
        Self {
            scheme: Some(scheme),
        }
    }

    /// A supported backend that reports no scheme at all.
    pub fn unset() -> Self {
        Self { scheme: None }
    }
}

impl AppearanceSource for StaticAppearance {
    fn color_scheme(&self) -> Result<Option<OsColorScheme>, AppearanceError> {
        Ok(self.scheme)
    }

    fn supports_color_scheme(&self) -> Result<bool, AppearanceError> {
        Ok(true)
    }

    fn subscribe(&self, _listener: OsSchemeListener) -> Result<CancelFn, AppearanceError> {
        Ok(Box::new(|| {}))
    }
}

/// Disposer handle for an OS scheme subscription.
///
/// `unsubscribe` is idempotent and safe to call on a subscription that
/// never succeeded; dropping the handle unsubscribes as well.
pub struct SchemeSubscription {
    cancel: Mutex<Option<CancelFn>>,
}

impl SchemeSubscription {
    fn new(cancel: CancelFn) -> Self {
        Self {
            cancel: Mutex::new(Some(cancel)),
        }
    }

    /// A subscription with nothing behind it.
    pub fn noop() -> Self {
        Self {
            cancel: Mutex::new(None),
        }
    }

    /// Cancel the underlying OS listener. Later calls are no-ops.
    pub fn unsubscribe(&self) {
        if let Some(cancel) = self.cancel.lock().unwrap().take() {
            cancel();
        }
    }

    /// Whether an OS listener is still registered.
    pub fn is_active(&self) -> bool {
        self.cancel.lock().unwrap().is_some()
    }
}

impl Drop for SchemeSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for SchemeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Never-failing view over an [`AppearanceSource`].
#[derive(Clone)]
pub struct SystemThemeDetector {
    source: Arc<dyn AppearanceSource>,
}

impl SystemThemeDetector {
    pub fn new(source: Arc<dyn AppearanceSource>) -> Self {
        Self { source }
    }

    /// A detector for platforms without any appearance backend.
    pub fn unsupported() -> Self {
        Self::new(Arc::new(UnsupportedAppearance))
    }

    /// The current OS scheme as a concrete theme.
    ///
    /// Never fails: an absent or broken OS API yields [`ThemeName::Light`].
    pub fn current_scheme(&self) -> ThemeName {
        match self.source.color_scheme() {
            Ok(Some(scheme)) => scheme.theme(),
            Ok(None) => ThemeName::Light,
            Err(err) => {
                warn!("system scheme query failed, defaulting to light: {err}");
                ThemeName::Light
            }
        }
    }

    /// Whether OS scheme detection exists here. A failing probe counts as
    /// unsupported.
    pub fn is_supported(&self) -> bool {
        match self.source.supports_color_scheme() {
            Ok(supported) => supported,
            Err(err) => {
                warn!("appearance capability probe failed: {err}");
                false
            }
        }
    }

    /// Register for scheme changes, translated into concrete themes
    /// (an OS report of "no scheme" arrives as light).
    ///
    /// If registration itself fails, the returned subscription is a no-op
    /// so teardown code can always call [`SchemeSubscription::unsubscribe`]
    /// unconditionally.
    pub fn subscribe(
        &self,
        listener: impl Fn(ThemeName) + Send + Sync + 'static,
    ) -> SchemeSubscription {
        let translated: OsSchemeListener = Box::new(move |scheme| {
            listener(scheme.map(OsColorScheme::theme).unwrap_or(ThemeName::Light));
        });

        match self.source.subscribe(translated) {
            Ok(cancel) => SchemeSubscription::new(cancel),
            Err(err) => {
                warn!("system scheme subscribe failed, notifications disabled: {err}");
                SchemeSubscription::noop()
            }
        }
    }
}

impl std::fmt::Debug for SystemThemeDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemThemeDetector")
            .field("supported", &self.is_supported())
            .finish()
    }
}
