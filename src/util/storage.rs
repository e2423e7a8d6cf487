//! Origin-scoped key-value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores that persist across sessions (`TokenStore`, the color-scheme
//! preference) talk to a `KeyValueStore` instead of `web-sys` directly, so the
//! browser backend can be swapped for an in-memory map in native tests.
//!
//! Values are raw strings. Nothing here wraps them in JSON.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A durable string slot map keyed by name.
///
/// Browser failures (no window, storage disabled, quota) are swallowed:
/// reads return `None` and writes are dropped.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared handle to a storage backend.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// `window.localStorage`. Outside the browser every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Whether a `storage` event's area is this origin's `localStorage`, as
/// opposed to `sessionStorage`.
#[cfg(feature = "csr")]
pub fn is_local_storage_area(area: Option<&web_sys::Storage>) -> bool {
    match (area, local_storage()) {
        (Some(area), Some(local)) => *area == local,
        _ => false,
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected write for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage rejected removal of {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Process-local map, used for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a storage with existing entries, as if left by a prior session.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Arc::new(Mutex::new(map)) }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}
