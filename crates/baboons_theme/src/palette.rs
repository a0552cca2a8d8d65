//! Built-in palettes for the three DiscBaboons themes.
//!
//! Brand colors (the baboon orange and the deep navy) are identical across
//! every palette; only neutrals and semantics change per theme. Blackout
//! pushes everything to pure black/white for maximum outdoor contrast.

use crate::color::Color;
use crate::theme::ThemeName;

/// Named color roles for one concrete theme.
///
/// Immutable: palettes are defined here and never change at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    // Surfaces
    pub background: Color,
    pub surface: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_light: Color,

    // Structure
    pub border: Color,

    // Brand
    pub primary: Color,
    pub secondary: Color,
    /// Readable text placed on `primary`.
    pub text_on_primary: Color,
    /// Readable text placed on `secondary`.
    pub text_on_secondary: Color,

    // Semantics
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,

    // Admin accents (golden, shared across themes)
    pub admin_primary: Color,
    pub admin_secondary: Color,
    pub admin_accent: Color,
}

impl ThemeName {
    /// Palette lookup. Total: every theme has exactly one palette.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => light(),
            Self::Dark => dark(),
            Self::Blackout => blackout(),
        }
    }
}

/// Convenience free function for ergonomic imports.
pub fn palette(name: ThemeName) -> Palette {
    name.palette()
}

/// Roles that never vary between themes.
struct BrandColors {
    primary: Color,
    secondary: Color,
    admin_primary: Color,
    admin_secondary: Color,
    admin_accent: Color,
}

fn brand() -> BrandColors {
    BrandColors {
        primary: Color::from_hex(0xEC7032),
        secondary: Color::from_hex(0x1D1D41),
        admin_primary: Color::from_hex(0xFFD700),
        admin_secondary: Color::from_hex(0xB8860B),
        admin_accent: Color::from_hex(0xFFF8DC),
    }
}

fn light() -> Palette {
    let brand = brand();
    Palette {
        background: Color::from_hex(0xFAFBFC),
        surface: Color::from_hex(0xFFFFFF),
        text: Color::from_hex(0x212121),
        text_secondary: Color::from_hex(0x666666),
        text_light: Color::from_hex(0x666666),
        border: Color::from_hex(0x757575),
        primary: brand.primary,
        secondary: brand.secondary,
        text_on_primary: Color::WHITE,
        text_on_secondary: Color::WHITE,
        success: Color::from_hex(0x4CAF50),
        error: Color::from_hex(0xD32F2F),
        warning: Color::from_hex(0xF57C00),
        info: Color::from_hex(0x0288D1),
        admin_primary: brand.admin_primary,
        admin_secondary: brand.admin_secondary,
        admin_accent: brand.admin_accent,
    }
}

fn dark() -> Palette {
    let brand = brand();
    Palette {
        background: Color::from_hex(0x121212),
        surface: Color::from_hex(0x1E1E1E),
        text: Color::WHITE,
        text_secondary: Color::from_hex(0xCCCCCC),
        text_light: Color::from_hex(0xCCCCCC),
        border: Color::from_hex(0x424242),
        primary: brand.primary,
        secondary: brand.secondary,
        text_on_primary: Color::WHITE,
        text_on_secondary: Color::WHITE,
        success: Color::from_hex(0x4CAF50),
        error: Color::from_hex(0xD32F2F),
        warning: Color::from_hex(0xF57C00),
        info: Color::from_hex(0x0288D1),
        admin_primary: brand.admin_primary,
        admin_secondary: brand.admin_secondary,
        admin_accent: brand.admin_accent,
    }
}

fn blackout() -> Palette {
    let brand = brand();
    Palette {
        background: Color::BLACK,
        surface: Color::BLACK,
        text: Color::WHITE,
        text_secondary: Color::WHITE,
        text_light: Color::WHITE,
        border: Color::WHITE,
        primary: brand.primary,
        secondary: brand.secondary,
        text_on_primary: Color::WHITE,
        text_on_secondary: Color::WHITE,
        // Semantic states collapse to white: on pure black, hue carries
        // less information than contrast.
        success: Color::WHITE,
        error: Color::WHITE,
        warning: Color::WHITE,
        info: Color::WHITE,
        admin_primary: brand.admin_primary,
        admin_secondary: brand.admin_secondary,
        admin_accent: brand.admin_accent,
    }
}
