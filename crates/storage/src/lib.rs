//! Storage layer for GoodSeva
//!
//! This crate provides the device key-value store and the persisted
//! preferences (theme mode and settings toggles) built on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod preferences;

pub use kv::{DeviceStore, KvConfig, KvError, KvStore};
pub use preferences::{
    DeviceSettings, PreferenceBackend, PreferenceError, PreferenceStore, SettingToggle, ThemeMode,
};
