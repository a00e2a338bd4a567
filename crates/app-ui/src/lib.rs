//! User interface layer for GoodSeva
//!
//! This crate provides the presentation models behind the screens: color
//! palettes and their resolution, design tokens, card view models and the
//! navigation graph.
//!
//! # Modules
//!
//! - [`theme`] - Light and dark palettes, palette resolution, OS appearance
//! - [`tokens`] - Design tokens (spacing, radius, font, shadows)
//! - [`components`] - Badge and card view models
//! - [`navigation`] - Routes, tab stacks, router and header menu
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{resolve, ThemeMode};
//! use app_ui::navigation::{Route, Router};
//!
//! let palette = resolve(ThemeMode::Dark, false);
//! assert_eq!(palette.primary, "#3b82f6");
//!
//! let route = Router::new().match_path("/trip-details?id=1");
//! assert_eq!(route, Route::TripDetails { id: "1".to_string() });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    dark_palette, is_dark, light_palette, resolve, Color, DetectedAppearance, FixedAppearance,
    Palette, SystemAppearance, ThemeMode,
};

pub use tokens::{font_size, radius, shadows, spacing, FontWeight, Shadow};

pub use components::{
    BadgeVariant, BidCard, DriverCard, LoadCard, StatCard, StatusBadge, TripCard, TruckCard,
    VerificationCheck,
};

pub use navigation::{
    MenuItem, NavigationStack, NavigationState, NavigationTab, Route, RouteParams, Router,
    StackEntry,
};
