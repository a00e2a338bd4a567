//! Theme provider
//!
//! One [`ThemeProvider`] is created at startup and passed to every screen
//! that draws. It owns the selected [`ThemeMode`] and the operating system's
//! dark signal, and resolves them to a palette on demand.
//!
//! Changing the mode applies in memory first and persists second. A failed
//! write is logged and the in-memory mode is kept.

use app_ui::theme::{self, Palette, SystemAppearance, ThemeMode};
use parking_lot::RwLock;
use storage::{PreferenceBackend, PreferenceStore};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy)]
struct ThemeState {
    mode: ThemeMode,
    system_is_dark: bool,
}

impl ThemeState {
    fn palette(&self) -> &'static Palette {
        theme::resolve(self.mode, self.system_is_dark)
    }
}

/// Holds the current theme selection and notifies observers of palette changes
pub struct ThemeProvider<B> {
    store: PreferenceStore<B>,
    state: RwLock<ThemeState>,
    palette_tx: watch::Sender<&'static Palette>,
}

impl<B: PreferenceBackend> ThemeProvider<B> {
    /// Create a provider, loading the persisted mode and sampling the OS appearance
    pub fn new(store: PreferenceStore<B>, appearance: &dyn SystemAppearance) -> Self {
        let state = ThemeState {
            mode: store.load_theme(),
            system_is_dark: appearance.is_dark(),
        };
        let (palette_tx, _) = watch::channel(state.palette());

        tracing::debug!(mode = %state.mode, system_is_dark = state.system_is_dark, "theme provider ready");

        Self {
            store,
            state: RwLock::new(state),
            palette_tx,
        }
    }

    /// Selected mode
    pub fn theme(&self) -> ThemeMode {
        self.state.read().mode
    }

    /// Whether the resolved palette is dark
    pub fn is_dark(&self) -> bool {
        let state = self.state.read();
        theme::is_dark(state.mode, state.system_is_dark)
    }

    /// Resolved palette
    pub fn colors(&self) -> &'static Palette {
        self.state.read().palette()
    }

    /// Watch the resolved palette
    pub fn subscribe(&self) -> watch::Receiver<&'static Palette> {
        self.palette_tx.subscribe()
    }

    /// Select a mode and persist it
    ///
    /// The new mode is visible to readers before the write starts, and stays
    /// selected when the write fails.
    pub fn set_theme(&self, mode: ThemeMode) {
        self.update(|state| state.mode = mode);

        if let Err(e) = self.store.save_theme(mode) {
            tracing::error!("Failed to save theme: {}", e);
        }
    }

    /// Record an OS appearance change
    pub fn set_system_dark(&self, dark: bool) {
        self.update(|state| state.system_is_dark = dark);
    }

    /// Re-sample the OS appearance
    pub fn refresh_system(&self, appearance: &dyn SystemAppearance) {
        self.set_system_dark(appearance.is_dark());
    }

    fn update(&self, apply: impl FnOnce(&mut ThemeState)) {
        let palette = {
            let mut state = self.state.write();
            apply(&mut state);
            state.palette()
        };
        self.palette_tx.send_if_modified(|current| {
            if std::ptr::eq(*current, palette) {
                false
            } else {
                *current = palette;
                true
            }
        });
    }
}
