//! Application configuration.
//!
//! Storage keys and theme names are fixed at build time. `AppConfig` is
//! constructed once in `App` and provided through context so stores and pages
//! never hard-code them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key holding the raw login token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the `auto | light | dark` color-scheme preference.
pub const COLOR_SCHEME_KEY: &str = "vueuse-color-scheme";

/// Class toggled on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub token_key: String,
    pub color_scheme_key: String,
    pub dark_class: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Scaffold".to_owned(),
            token_key: TOKEN_KEY.to_owned(),
            color_scheme_key: COLOR_SCHEME_KEY.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
        }
    }
}
