//! Dark mode initialization and toggle.
//!
//! Reads the stored color scheme (`auto | light | dark`) and applies the dark
//! class to the `<html>` element. Toggle writes back through the storage
//! backend and updates the class. DOM access requires a browser environment;
//! native builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::AppConfig;
use crate::util::storage::KeyValueStore;

/// Persisted color-scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    /// Follow `prefers-color-scheme`.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings fall back to `Auto`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Auto,
        }
    }

    /// Whether this scheme renders dark given the system preference.
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Auto => system_prefers_dark,
            Self::Light => false,
            Self::Dark => true,
        }
    }

    /// Scheme to persist for an explicit choice. Matching the system
    /// preference is stored as `Auto`.
    pub fn for_choice(dark: bool, system_prefers_dark: bool) -> Self {
        if dark == system_prefers_dark {
            Self::Auto
        } else if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Read the stored color scheme, defaulting to `Auto`.
pub fn read_preference(store: &dyn KeyValueStore, config: &AppConfig) -> ColorScheme {
    store
        .get(&config.color_scheme_key)
        .map_or(ColorScheme::Auto, |raw| ColorScheme::parse(&raw))
}

/// Whether the browser reports `prefers-color-scheme: dark`.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Initial dark-mode flag for this session.
pub fn initial(store: &dyn KeyValueStore, config: &AppConfig) -> bool {
    read_preference(store, config).resolve(system_prefers_dark())
}

/// Apply or remove the dark class on the `<html>` element.
pub fn apply(config: &AppConfig, enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if root.class_list().toggle_with_force(&config.dark_class, enabled).is_err() {
            log::warn!("could not set theme class {}", config.dark_class);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, enabled);
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(store: &dyn KeyValueStore, config: &AppConfig, current: bool) -> bool {
    let next = !current;
    apply(config, next);
    let scheme = ColorScheme::for_choice(next, system_prefers_dark());
    store.set(&config.color_scheme_key, scheme.as_str());
    next
}
