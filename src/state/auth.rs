//! Token-backed login state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TokenStore` is built once in `App` and provided through context. Pages read
//! the derived identity to decide between the signed-in and signed-out views;
//! the login page is the only writer.
//!
//! DESIGN
//! ======
//! The token lives in an `RwSignal` mirrored to the storage backend on every
//! write. The identity is a `Memo` over that signal, so it is recomputed only
//! when the token changes and reactive readers update without polling.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::util::storage::SharedStore;
use crate::util::token::identity_from_token;

/// A single persisted token slot plus the identity derived from it.
#[derive(Clone)]
pub struct TokenStore {
    key: Arc<str>,
    backend: SharedStore,
    token: RwSignal<String>,
    identity: Memo<String>,
}

impl TokenStore {
    /// Open the slot `key`, starting from whatever a prior session left there.
    pub fn new(backend: SharedStore, key: &str) -> Self {
        let initial = backend.get(key).unwrap_or_default();
        let token = RwSignal::new(initial);
        let identity = Memo::new(move |_| token.with(|t| identity_from_token(t)));
        Self { key: Arc::from(key), backend, token, identity }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current token. Never blocks and never fails.
    pub fn read(&self) -> String {
        self.token.get()
    }

    /// Replace the token and persist it.
    pub fn write(&self, value: impl Into<String>) {
        let value = value.into();
        log::debug!("token written ({} bytes)", value.len());
        self.backend.set(&self.key, &value);
        self.token.set(value);
    }

    /// Forget the token, in memory and in storage.
    pub fn clear(&self) {
        log::debug!("token cleared");
        self.backend.remove(&self.key);
        self.token.set(String::new());
    }

    /// Adopt a value another tab wrote to storage. Does not write back.
    pub fn receive_external(&self, value: Option<String>) {
        let value = value.unwrap_or_default();
        if self.token.with_untracked(|t| *t != value) {
            self.token.set(value);
        }
    }

    /// Display username, or `""` when signed out or the token is unreadable.
    pub fn identity(&self) -> String {
        self.identity.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.with(|name| !name.is_empty())
    }

    pub fn token_signal(&self) -> Signal<String> {
        self.token.into()
    }

    pub fn identity_signal(&self) -> Signal<String> {
        self.identity.into()
    }
}

/// What a `storage` event from another tab means for one token slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageChange {
    Ignore,
    /// The slot was written or removed; adopt the event's new value.
    Adopt,
    /// The whole storage area was cleared.
    Cleared,
}

/// Classify a `storage` event for the slot `key`. Events from
/// `sessionStorage` never touch a `localStorage`-backed slot.
pub fn classify_storage_event(key: &str, event_key: Option<&str>, from_local_storage: bool) -> StorageChange {
    if !from_local_storage {
        return StorageChange::Ignore;
    }
    match event_key {
        Some(k) if k == key => StorageChange::Adopt,
        Some(_) => StorageChange::Ignore,
        None => StorageChange::Cleared,
    }
}

/// Keep `store` in step with writes made to the same key from other tabs.
pub fn install_storage_sync(store: &TokenStore) {
    #[cfg(feature = "csr")]
    {
        use crate::util::storage::is_local_storage_area;

        let store = store.clone();
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            let from_local = is_local_storage_area(ev.storage_area().as_ref());
            match classify_storage_event(store.key(), ev.key().as_deref(), from_local) {
                StorageChange::Adopt => store.receive_external(ev.new_value()),
                StorageChange::Cleared => store.receive_external(None),
                StorageChange::Ignore => {}
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
    }
}
