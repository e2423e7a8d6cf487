//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of auth state so theme controls can evolve
//! independently of the token slot.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::AppConfig;
use crate::util::dark_mode;
use crate::util::storage::KeyValueStore;

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Load the session's starting state and apply the theme class.
    pub fn load(store: &dyn KeyValueStore, config: &AppConfig) -> Self {
        let dark_mode = dark_mode::initial(store, config);
        dark_mode::apply(config, dark_mode);
        Self { dark_mode }
    }

    /// Flip dark mode, apply it, and persist the choice.
    pub fn toggle_dark_mode(&mut self, store: &dyn KeyValueStore, config: &AppConfig) {
        self.dark_mode = dark_mode::toggle(store, config, self.dark_mode);
    }
}
