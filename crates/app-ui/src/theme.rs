//! Color palettes and palette resolution for GoodSeva
//!
//! Two palettes exist, light and dark. A [`ThemeMode`] plus the operating
//! system's dark signal resolves to exactly one of them:
//!
//! | mode    | system dark | palette |
//! |---------|-------------|---------|
//! | `light` | any         | light   |
//! | `dark`  | any         | dark    |
//! | `auto`  | `true`      | dark    |
//! | `auto`  | `false`     | light   |
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{resolve, ThemeMode};
//!
//! let palette = resolve(ThemeMode::Auto, true);
//! assert_eq!(palette.background, "#0f172a");
//! ```

use serde::{Deserialize, Serialize};

pub use storage::ThemeMode;

// =============================================================================
// Color Types
// =============================================================================

/// A color as a lowercase hex string (e.g. "#1e3a8a")
pub type Color = &'static str;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Palette
// =============================================================================

/// The full named color set a screen draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Brand primary
    pub primary: Color,
    /// Pressed/emphasis primary
    pub primary_dark: Color,
    /// Accent
    pub accent: Color,
    /// Positive
    pub success: Color,
    /// Caution
    pub warning: Color,
    /// Negative
    pub error: Color,
    /// In-transit status
    pub status_in_transit: Color,
    /// Assigned status
    pub status_assigned: Color,
    /// Verified documents
    pub status_verified: Color,
    /// Screen background
    pub background: Color,
    /// Raised surface
    pub surface: Color,
    /// Card background
    pub card: Color,
    /// Main text
    pub text_primary: Color,
    /// Secondary text
    pub text_secondary: Color,
    /// Hint text
    pub text_tertiary: Color,
    /// Text on primary
    pub text_inverse: Color,
    /// Borders
    pub border: Color,
    /// Dividers
    pub border_light: Color,
    /// Header gradient start
    pub gradient_start: Color,
    /// Header gradient end
    pub gradient_end: Color,
    /// Active tab icon
    pub tab_active: Color,
    /// Inactive tab icon
    pub tab_inactive: Color,
}

/// Light palette
pub const LIGHT: Palette = Palette {
    primary: "#1e3a8a",
    primary_dark: "#1e40af",
    accent: "#dc2626",
    success: "#22c55e",
    warning: "#f59e0b",
    error: "#ef4444",
    status_in_transit: "#22c55e",
    status_assigned: "#22c55e",
    status_verified: "#22c55e",
    background: "#ffffff",
    surface: "#ffffff",
    card: "#ffffff",
    text_primary: "#0f172a",
    text_secondary: "#64748b",
    text_tertiary: "#94a3b8",
    text_inverse: "#ffffff",
    border: "#e2e8f0",
    border_light: "#f1f5f9",
    gradient_start: "#ffffff",
    gradient_end: "#fce7f3",
    tab_active: "#000000",
    tab_inactive: "#94a3b8",
};

/// Dark palette
pub const DARK: Palette = Palette {
    primary: "#3b82f6",
    primary_dark: "#2563eb",
    accent: "#dc2626",
    success: "#22c55e",
    warning: "#f59e0b",
    error: "#ef4444",
    status_in_transit: "#22c55e",
    status_assigned: "#22c55e",
    status_verified: "#22c55e",
    background: "#0f172a",
    surface: "#1e293b",
    card: "#1e293b",
    text_primary: "#f1f5f9",
    text_secondary: "#cbd5e1",
    text_tertiary: "#94a3b8",
    text_inverse: "#0f172a",
    border: "#334155",
    border_light: "#475569",
    gradient_start: "#0f172a",
    gradient_end: "#1e293b",
    tab_active: "#ffffff",
    tab_inactive: "#64748b",
};

/// Get the light palette
pub fn light_palette() -> &'static Palette {
    &LIGHT
}

/// Get the dark palette
pub fn dark_palette() -> &'static Palette {
    &DARK
}

// =============================================================================
// Resolution
// =============================================================================

/// Whether `mode` renders dark given the system signal
pub fn is_dark(mode: ThemeMode, system_is_dark: bool) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::Auto => system_is_dark,
    }
}

/// Resolve the palette for `mode`
pub fn resolve(mode: ThemeMode, system_is_dark: bool) -> &'static Palette {
    if is_dark(mode, system_is_dark) {
        &DARK
    } else {
        &LIGHT
    }
}

// =============================================================================
// System Appearance
// =============================================================================

/// Source of the operating system's light/dark setting
pub trait SystemAppearance: Send + Sync {
    /// Whether the OS currently prefers dark
    fn is_dark(&self) -> bool;
}

/// Platform detection through `dark-light`
///
/// Only an explicit dark answer counts; `Unspecified` and detection errors
/// read as light.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectedAppearance;

impl SystemAppearance for DetectedAppearance {
    fn is_dark(&self) -> bool {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => true,
            Ok(_) => false,
            Err(e) => {
                tracing::debug!("System appearance detection failed: {}", e);
                false
            }
        }
    }
}

/// A fixed answer, for tests and headless runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedAppearance(pub bool);

impl SystemAppearance for FixedAppearance {
    fn is_dark(&self) -> bool {
        self.0
    }
}
