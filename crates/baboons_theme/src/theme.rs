//! Theme identifiers and the user-facing theme mode
//!
//! [`ThemeName`] is always concrete and renderable. [`ThemeMode`] is the
//! durable, user-facing preference and the only place the `system`
//! sentinel exists; resolution collapses it to a concrete name before
//! anything visual happens.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A stored string that names no known theme or mode.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

/// Concrete, renderable theme identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
    /// High-contrast pure-black theme for outdoor readability.
    Blackout,
}

impl ThemeName {
    /// Stable id for persistence and config.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Blackout => "blackout",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Blackout => "Blackout",
        }
    }

    /// Full theme list.
    pub fn all() -> &'static [ThemeName] {
        const NAMES: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Blackout];
        &NAMES
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "blackout" => Ok(Self::Blackout),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// The user's durable theme preference.
///
/// Either a concrete [`ThemeName`] or `System`, meaning "track the OS
/// color scheme". This is what gets persisted; the rendered theme is
/// always the result of [`ThemeMode::resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Follow the OS-reported color scheme.
    #[default]
    System,
    /// An explicit user choice, independent of the OS.
    Named(ThemeName),
}

impl ThemeMode {
    pub const SYSTEM_ID: &'static str = "system";

    /// Stable id for persistence and config.
    pub fn id(self) -> &'static str {
        match self {
            Self::System => Self::SYSTEM_ID,
            Self::Named(name) => name.id(),
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::System => "Match system",
            Self::Named(name) => name.display_name(),
        }
    }

    /// Every selectable mode, in settings-menu order.
    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 4] = [
            ThemeMode::System,
            ThemeMode::Named(ThemeName::Light),
            ThemeMode::Named(ThemeName::Dark),
            ThemeMode::Named(ThemeName::Blackout),
        ];
        &MODES
    }

    /// Collapse the mode to a concrete theme given the current OS report.
    ///
    /// Total: an explicit choice resolves to itself, `System` to whatever
    /// the detector reported. There is no error path.
    pub fn resolve(self, system: ThemeName) -> ThemeName {
        match self {
            Self::System => system,
            Self::Named(name) => name,
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<ThemeName> for ThemeMode {
    fn from(name: ThemeName) -> Self {
        Self::Named(name)
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::SYSTEM_ID {
            return Ok(Self::System);
        }
        ThemeName::from_str(s).map(Self::Named)
    }
}

impl Serialize for ThemeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for ThemeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
