//! Application Integration Tests
//!
//! End-to-end tests across storage, providers, navigation and screen fetches.

use app_core::logistics::{driver_filters, filter_by_status, StatusFilter};
use app_core::domain::DriverStatus;
use app_state::LoadState;
use app_ui::navigation::{MenuItem, NavigationTab, Route};
use app_ui::theme::{FixedAppearance, ThemeMode, DARK, LIGHT};
use goodseva::config::{AppConfig, StorageConfig};
use std::path::Path;
use std::sync::Arc;
use storage::{DeviceStore, KvStore, SettingToggle};
use tempfile::TempDir;

fn config_at(dir: &Path) -> AppConfig {
    AppConfig {
        storage: StorageConfig {
            path: dir.join("kv").to_string_lossy().into_owned(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn open(config: &AppConfig, system_dark: bool) -> goodseva::App {
    goodseva::App::with_appearance(config.clone(), &FixedAppearance(system_dark)).unwrap()
}

/// Theme choice survives a restart for every mode
#[test]
fn test_theme_persists_across_restart() {
    for mode in ThemeMode::all() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        // Phase 1: select the mode
        {
            let app = open(&config, false);
            assert_eq!(app.theme.theme(), ThemeMode::Light);
            app.theme.set_theme(mode);
        }

        // Phase 2: restart and verify
        {
            let app = open(&config, false);
            assert_eq!(app.theme.theme(), mode);
        }
    }
}

/// An unrecognised persisted value starts in light mode
#[test]
fn test_unrecognised_theme_falls_back_to_light() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_at(temp_dir.path());

    {
        let kv = Arc::new(KvStore::new(config.storage.kv_config()).unwrap());
        let device = DeviceStore::new(kv);
        device.set_str("theme", "purple").unwrap();
        device.flush().unwrap();
    }

    let app = open(&config, true);
    assert_eq!(app.theme.theme(), ThemeMode::Light);
    assert_eq!(app.theme.colors(), &LIGHT);
}

/// Auto mode follows the system appearance sampled at startup
#[test]
fn test_auto_mode_uses_system_appearance() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_at(temp_dir.path());

    open(&config, false).theme.set_theme(ThemeMode::Auto);

    assert_eq!(open(&config, true).theme.colors(), &DARK);
    assert_eq!(open(&config, false).theme.colors(), &LIGHT);
}

/// Settings toggles survive a restart
#[test]
fn test_settings_persist_across_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_at(temp_dir.path());

    {
        let app = open(&config, false);
        app.settings.set(SettingToggle::LocationSharing, false);
        app.flush().unwrap();
    }

    let app = open(&config, false);
    assert!(!app.settings.get(SettingToggle::LocationSharing));
    assert!(app.settings.get(SettingToggle::PushNotifications));
}

/// Dashboard data arrives after the simulated delay
#[tokio::test(start_paused = true)]
async fn test_dashboard_fetch() {
    let temp_dir = TempDir::new().unwrap();
    let app = open(&config_at(temp_dir.path()), false);

    let home = app.mount("home");
    let mut dashboard = home.fetch_all(app.logistics.clone());
    let state = dashboard.settled().await;
    let snapshot = state.data().unwrap();

    assert_eq!(snapshot.drivers.len(), 3);
    assert_eq!(snapshot.trucks.len(), 3);
    assert_eq!(snapshot.trips.len(), 3);
    assert_eq!(snapshot.bids.len(), 2);
    assert_eq!((snapshot.stats.in_transit, snapshot.stats.trucks, snapshot.stats.bids), (9, 23, 11));

    let in_transit = filter_by_status(&snapshot.drivers, StatusFilter::Only(DriverStatus::InTransit));
    assert!(in_transit.iter().all(|d| d.status == DriverStatus::InTransit));
    assert_eq!(driver_filters()[0], StatusFilter::All);
}

/// Leaving a screen before its data arrives drops the delivery
#[tokio::test(start_paused = true)]
async fn test_unmounted_screen_receives_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let app = open(&config_at(temp_dir.path()), false);

    let trips = app.mount("trips");
    let mut data = trips.fetch_all(app.logistics.clone());
    drop(trips);

    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
    assert_eq!(data.settled().await, LoadState::Cancelled);
}

/// Login, browse, and logout through the header menu
#[test]
fn test_navigation_session() {
    let temp_dir = TempDir::new().unwrap();
    let mut app = open(&config_at(temp_dir.path()), false);

    app.navigation.navigate(Route::Login);
    app.navigation.replace(Route::Home);
    app.navigation.navigate(Route::TripDetails { id: "1".to_string() });
    assert_eq!(app.navigation.active_tab, NavigationTab::Trips);

    app.navigation.select_menu_item(MenuItem::Settings);
    assert_eq!(app.navigation.current_route(), &Route::Settings);

    app.logout();
    assert_eq!(app.navigation.current_route(), &Route::Welcome);
    assert!(app.user.user().is_some());
}
