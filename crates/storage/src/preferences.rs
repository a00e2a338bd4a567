//! Persisted device preferences
//!
//! The theme mode is stored as a plain string under the `theme` key; any value
//! other than `light`, `dark` or `auto` is treated as absent. Settings toggles
//! live next to it as a single JSON document.

use crate::kv::{DeviceStore, KvError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key holding the theme mode
pub const THEME_KEY: &str = "theme";

/// Key holding the settings toggles document
pub const SETTINGS_KEY: &str = "settings";

/// Preference errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Backend read or write failed
    #[error("Preference backend error: {0}")]
    Backend(#[from] KvError),

    /// Settings document could not be (de)serialized
    #[error("Preference serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, PreferenceError>;

/// User-selected theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light
    #[default]
    Light,
    /// Always dark
    Dark,
    /// Follow the operating system
    Auto,
}

impl ThemeMode {
    /// The persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    /// All modes in the order the theme screen lists them
    pub fn all() -> [ThemeMode; 3] {
        [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto]
    }

    /// Label shown on the theme screen
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
            ThemeMode::Auto => "Auto",
        }
    }

    /// Description shown under the label
    pub fn description(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Clean and bright interface",
            ThemeMode::Dark => "Easy on the eyes at night",
            ThemeMode::Auto => "Match system settings",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    /// Exact match only; the persisted value is written by [`ThemeMode::as_str`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

/// Device settings toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    /// Push notifications
    #[serde(default = "default_true")]
    pub push_notifications: bool,

    /// Share location while on a trip
    #[serde(default = "default_true")]
    pub location_sharing: bool,

    /// Accept offered trips without confirmation
    #[serde(default)]
    pub auto_accept_trips: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            push_notifications: true,
            location_sharing: true,
            auto_accept_trips: false,
        }
    }
}

impl DeviceSettings {
    /// Email notifications are always on and cannot be changed from the device
    pub const EMAIL_NOTIFICATIONS: bool = true;

    /// Read a toggle
    pub fn get(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::PushNotifications => self.push_notifications,
            SettingToggle::EmailNotifications => Self::EMAIL_NOTIFICATIONS,
            SettingToggle::LocationSharing => self.location_sharing,
            SettingToggle::AutoAcceptTrips => self.auto_accept_trips,
        }
    }

    /// Update a toggle, returning whether anything changed
    pub fn set(&mut self, toggle: SettingToggle, enabled: bool) -> bool {
        let slot = match toggle {
            SettingToggle::PushNotifications => &mut self.push_notifications,
            SettingToggle::LocationSharing => &mut self.location_sharing,
            SettingToggle::AutoAcceptTrips => &mut self.auto_accept_trips,
            SettingToggle::EmailNotifications => return false,
        };
        let changed = *slot != enabled;
        *slot = enabled;
        changed
    }
}

/// Toggles on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingToggle {
    /// Push notifications
    PushNotifications,
    /// Email notifications (read-only)
    EmailNotifications,
    /// Location sharing
    LocationSharing,
    /// Auto-accept trips
    AutoAcceptTrips,
}

impl SettingToggle {
    /// Label shown on the settings screen
    pub fn label(&self) -> &'static str {
        match self {
            SettingToggle::PushNotifications => "Push Notifications",
            SettingToggle::EmailNotifications => "Email Notifications",
            SettingToggle::LocationSharing => "Location Sharing",
            SettingToggle::AutoAcceptTrips => "Auto-Accept Trips",
        }
    }

    /// Whether the user can change this toggle
    pub fn is_editable(&self) -> bool {
        !matches!(self, SettingToggle::EmailNotifications)
    }
}

fn default_true() -> bool {
    true
}

/// String-keyed storage the preference store reads from and writes to
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceBackend: Send + Sync {
    /// Read a raw value
    fn read(&self, key: &str) -> std::result::Result<Option<String>, KvError>;

    /// Write a raw value
    fn write(&self, key: &str, value: &str) -> std::result::Result<(), KvError>;
}

impl PreferenceBackend for DeviceStore {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, KvError> {
        self.get_str(key)
    }

    fn write(&self, key: &str, value: &str) -> std::result::Result<(), KvError> {
        self.set_str(key, value)?;
        self.flush()
    }
}

/// Loads and saves device preferences
pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Create a preference store over a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the raw theme value
    pub fn try_load_theme(&self) -> Result<Option<ThemeMode>> {
        let raw = self.backend.read(THEME_KEY)?;
        Ok(raw.and_then(|value| match value.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(_) => {
                tracing::warn!(value = %value, "ignoring unrecognised persisted theme");
                None
            }
        }))
    }

    /// Load the theme mode, falling back to light on absence or failure
    pub fn load_theme(&self) -> ThemeMode {
        match self.try_load_theme() {
            Ok(mode) => mode.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Failed to load theme: {}", e);
                ThemeMode::default()
            }
        }
    }

    /// Persist the theme mode
    pub fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        self.backend.write(THEME_KEY, mode.as_str())?;
        Ok(())
    }

    /// Load settings toggles, falling back to defaults on absence or failure
    pub fn load_settings(&self) -> DeviceSettings {
        let loaded = self
            .backend
            .read(SETTINGS_KEY)
            .map_err(PreferenceError::from)
            .and_then(|raw| match raw {
                Some(json) => Ok(Some(serde_json::from_str::<DeviceSettings>(&json)?)),
                None => Ok(None),
            });

        match loaded {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Failed to load settings: {}", e);
                DeviceSettings::default()
            }
        }
    }

    /// Persist settings toggles
    pub fn save_settings(&self, settings: &DeviceSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.backend.write(SETTINGS_KEY, &json)?;
        Ok(())
    }
}
