//! # token-scaffold
//!
//! Leptos + WASM client scaffold: a two-route router, a persisted dark-mode
//! preference, and a signed-in identity decoded from a token kept in
//! `localStorage`.
//!
//! Browser-only code sits behind the `csr` feature. Without it, DOM and
//! storage access no-op so state and decoding logic run in native tests.

pub mod app;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;
