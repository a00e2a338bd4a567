//! Settings screen state

use parking_lot::RwLock;
use storage::{DeviceSettings, PreferenceBackend, PreferenceStore, SettingToggle};

/// Device toggles, loaded once and written through on every change
pub struct SettingsController<B> {
    store: PreferenceStore<B>,
    settings: RwLock<DeviceSettings>,
}

impl<B: PreferenceBackend> SettingsController<B> {
    /// Load persisted toggles
    pub fn new(store: PreferenceStore<B>) -> Self {
        let settings = store.load_settings();
        Self {
            store,
            settings: RwLock::new(settings),
        }
    }

    /// Current toggles
    pub fn settings(&self) -> DeviceSettings {
        *self.settings.read()
    }

    /// Read one toggle
    pub fn get(&self, toggle: SettingToggle) -> bool {
        self.settings.read().get(toggle)
    }

    /// Flip a toggle and persist; read-only toggles are left alone
    ///
    /// Returns whether the toggle changed. Like the theme, a failed write
    /// keeps the in-memory value.
    pub fn set(&self, toggle: SettingToggle, enabled: bool) -> bool {
        let snapshot = {
            let mut settings = self.settings.write();
            if !settings.set(toggle, enabled) {
                return false;
            }
            *settings
        };

        if let Err(e) = self.store.save_settings(&snapshot) {
            tracing::error!("Failed to save settings: {}", e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::{DeviceStore, KvStore};

    fn device() -> DeviceStore {
        DeviceStore::new(Arc::new(KvStore::in_memory().unwrap()))
    }

    #[test]
    fn test_defaults() {
        let controller = SettingsController::new(PreferenceStore::new(device()));
        assert!(controller.get(SettingToggle::PushNotifications));
        assert!(controller.get(SettingToggle::LocationSharing));
        assert!(!controller.get(SettingToggle::AutoAcceptTrips));
        assert!(controller.get(SettingToggle::EmailNotifications));
    }

    #[test]
    fn test_changes_survive_reload() {
        let device = device();
        let controller = SettingsController::new(PreferenceStore::new(device.clone()));
        assert!(controller.set(SettingToggle::AutoAcceptTrips, true));
        assert!(controller.set(SettingToggle::PushNotifications, false));
        assert!(!controller.set(SettingToggle::PushNotifications, false));

        let reloaded = SettingsController::new(PreferenceStore::new(device));
        assert!(reloaded.get(SettingToggle::AutoAcceptTrips));
        assert!(!reloaded.get(SettingToggle::PushNotifications));
    }

    #[test]
    fn test_email_toggle_is_read_only() {
        let controller = SettingsController::new(PreferenceStore::new(device()));
        assert!(!controller.set(SettingToggle::EmailNotifications, false));
        assert!(controller.get(SettingToggle::EmailNotifications));
    }
}
