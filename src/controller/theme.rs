//! Theme manager

use tracing::{debug, info, warn};

use crate::{
    services::PreferenceStore,
    state::{Theme, ThemePreference, THEME_KEY},
    tasks::ThemeListener,
};

/// Applies the persisted theme, or follows the system preference while the
/// user has not chosen one
pub struct ThemeManager {
    preference: ThemePreference,
    store: Box<dyn PreferenceStore>,
    listener: Box<dyn ThemeListener>,
}

impl ThemeManager {
    /// Resolve the initial theme. The system listener is started only when
    /// no explicit preference is stored.
    pub fn load(
        store: Box<dyn PreferenceStore>,
        mut listener: Box<dyn ThemeListener>,
        system_is_dark: bool,
    ) -> Self {
        let preference = match store.get(THEME_KEY).filter(|v| !v.is_empty()) {
            Some(stored) => {
                info!("Using saved theme: {}", stored);
                ThemePreference::explicit(Theme::from_stored(&stored) == Theme::Dark)
            }
            None => {
                info!("No saved theme, following system (dark={})", system_is_dark);
                listener.listen();
                ThemePreference::system(system_is_dark)
            }
        };

        Self {
            preference,
            store,
            listener,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn theme(&self) -> Theme {
        self.preference.theme()
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_listening()
    }

    /// Flip the theme and persist the choice
    pub fn toggle(&mut self) {
        self.preference = ThemePreference::explicit(!self.preference.is_dark);
        let theme = self.preference.theme();

        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!("Failed to save theme preference: {}", e);
        }
        self.listener.stop();
        info!("Theme set to {}", theme.as_str());
    }

    /// Follow a system preference change unless the user chose a theme
    pub fn apply_system(&mut self, is_dark: bool) {
        if self.preference.explicit {
            debug!("Ignoring system theme change, explicit preference is set");
            return;
        }
        self.preference.is_dark = is_dark;
        info!("Following system theme: {}", self.preference.theme().as_str());
    }

    pub(super) fn shutdown(&mut self) {
        self.listener.stop();
    }
}
