//! Persisted client state.
//!
//! The browser's `localStorage` is the only durable store the client owns.
//! Everything that reads or writes it goes through [`KeyValueStore`] so the
//! session and theme stores can be exercised against [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key holding the opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Key holding the JSON-serialized session user.
pub const USER_KEY: &str = "user";
/// Key holding the selected theme preset key.
pub const THEME_KEY: &str = "selectedTheme";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same map, which lets a test keep a
/// handle and inspect what a store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`, available in the browser only.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("[storage] failed to write {key}");
                }
            }
            None => tracing::warn!("[storage] localStorage unavailable, {key} not persisted"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!("[storage] failed to remove {key}");
            }
        }
    }
}

/// The durable store for the current target.
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Rc<dyn KeyValueStore> {
    Rc::new(BrowserStorage)
}

/// The durable store for the current target.
///
/// Off the browser there is nothing durable to talk to, so state only lives
/// for the process.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Rc<dyn KeyValueStore> {
    Rc::new(MemoryStore::new())
}
