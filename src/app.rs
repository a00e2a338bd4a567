//! Application bootstrap
//!
//! [`App`] wires the long-lived pieces together once at startup: the device
//! store, the theme/settings/user providers, the data source and navigation.

use crate::config::AppConfig;
use anyhow::Context;
use app_core::logistics::{LogisticsSource, MockLogistics};
use app_state::{ScreenScope, SettingsController, ThemeProvider, UserProvider};
use app_ui::navigation::NavigationState;
use app_ui::theme::{DetectedAppearance, SystemAppearance};
use std::sync::Arc;
use storage::{DeviceStore, KvStore, PreferenceStore};

/// The running application
pub struct App {
    config: AppConfig,
    kv: Arc<KvStore>,
    /// Theme selection
    pub theme: ThemeProvider<DeviceStore>,
    /// Settings toggles
    pub settings: SettingsController<DeviceStore>,
    /// Signed-in user
    pub user: UserProvider,
    /// Data behind every list screen
    pub logistics: Arc<dyn LogisticsSource>,
    /// Screen stacks
    pub navigation: NavigationState,
}

impl App {
    /// Start with the platform's appearance detection
    pub fn open(config: AppConfig) -> anyhow::Result<Self> {
        Self::with_appearance(config, &DetectedAppearance)
    }

    /// Start with an explicit appearance source
    pub fn with_appearance(
        config: AppConfig,
        appearance: &dyn SystemAppearance,
    ) -> anyhow::Result<Self> {
        config.validate().context("invalid configuration")?;

        let kv = KvStore::new(config.storage.kv_config()).with_context(|| {
            format!("failed to open key-value store at {}", config.storage.path)
        })?;
        let kv = Arc::new(kv);
        let device = DeviceStore::new(Arc::clone(&kv));

        let theme = ThemeProvider::new(PreferenceStore::new(device.clone()), appearance);
        let settings = SettingsController::new(PreferenceStore::new(device));
        let logistics: Arc<dyn LogisticsSource> =
            Arc::new(MockLogistics::new(config.data.fetch_delay()));

        tracing::info!(
            storage = %config.storage.path,
            theme = %theme.theme(),
            "GoodSeva started"
        );

        Ok(Self {
            config,
            kv,
            theme,
            settings,
            user: UserProvider::default(),
            logistics,
            navigation: NavigationState::new(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Scope for a newly mounted screen
    pub fn mount(&self, screen: &str) -> ScreenScope {
        tracing::debug!(screen, "mount");
        ScreenScope::new(screen)
    }

    /// Sign out and return to the welcome screen
    pub fn logout(&mut self) {
        self.navigation.logout();
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> anyhow::Result<()> {
        self.kv.flush().context("failed to flush key-value store")
    }
}
