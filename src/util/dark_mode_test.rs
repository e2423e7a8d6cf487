#![cfg(not(feature = "csr"))]

use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn read_preference_defaults_to_auto() {
    let store = MemoryStorage::new();
    assert_eq!(read_preference(&store, &AppConfig::default()), ColorScheme::Auto);
}

#[test]
fn read_preference_parses_stored_scheme() {
    let config = AppConfig::default();
    let store = MemoryStorage::with_entries([(config.color_scheme_key.clone(), "dark".to_owned())]);
    assert_eq!(read_preference(&store, &config), ColorScheme::Dark);
    store.set(&config.color_scheme_key, "garbage");
    assert_eq!(read_preference(&store, &config), ColorScheme::Auto);
}

#[test]
fn resolve_follows_system_only_for_auto() {
    assert!(ColorScheme::Auto.resolve(true));
    assert!(!ColorScheme::Auto.resolve(false));
    assert!(ColorScheme::Dark.resolve(false));
    assert!(!ColorScheme::Light.resolve(true));
}

#[test]
fn for_choice_stores_auto_when_matching_system() {
    assert_eq!(ColorScheme::for_choice(true, true), ColorScheme::Auto);
    assert_eq!(ColorScheme::for_choice(false, false), ColorScheme::Auto);
    assert_eq!(ColorScheme::for_choice(true, false), ColorScheme::Dark);
    assert_eq!(ColorScheme::for_choice(false, true), ColorScheme::Light);
}

#[test]
fn toggle_flips_and_persists() {
    let config = AppConfig::default();
    let store = MemoryStorage::new();
    assert!(toggle(&store, &config, false));
    assert_eq!(store.get(&config.color_scheme_key).as_deref(), Some("dark"));
    assert!(!toggle(&store, &config, true));
    assert_eq!(store.get(&config.color_scheme_key).as_deref(), Some("auto"));
}

#[test]
fn initial_is_false_without_preference_in_native_tests() {
    assert!(!initial(&MemoryStorage::new(), &AppConfig::default()));
}

#[test]
fn apply_is_noop_but_callable() {
    let config = AppConfig::default();
    apply(&config, false);
    apply(&config, true);
}
