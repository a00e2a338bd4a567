//! Application state for GoodSeva
//!
//! This crate holds the long-lived providers created at startup (theme,
//! settings, user) and the screen scopes that own in-flight fetches.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod screen;
pub mod settings;
pub mod theme;
pub mod user;

pub use screen::{LoadState, ScreenData, ScreenScope};
pub use settings::SettingsController;
pub use theme::ThemeProvider;
pub use user::UserProvider;
