//! Durable client storage behind a fallible adapter.
//!
//! Browser storage can be disabled or full, so reads and writes surface
//! errors as `Result` and every caller falls back to a safe default.
//! The sidebar open/closed flag is the one piece of state persisted
//! here: missing value means open, unreadable storage means closed
//! until the client-side read says otherwise, and a failed write keeps
//! the in-memory state while skipping persistence.

use gloo_storage::{LocalStorage, Storage};
use log::error;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use yew::prelude::*;

/// Storage key for the control panel sidebar visibility flag.
pub const SIDEBAR_OPEN_KEY: &str = "league_cp_sidebar_open";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Raw string key/value storage. Implementations must not panic on
/// backend failure; they report it and the caller picks the fallback.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage` adapter.
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the persisted sidebar flag. No stored value defaults to open;
/// an unreadable or corrupt value logs and falls back to closed.
pub fn load_sidebar_open(store: &dyn KeyValueStore) -> bool {
    match store.read(SIDEBAR_OPEN_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
            Ok(open) => open,
            Err(e) => {
                error!("Corrupt sidebar flag in storage: {}", e);
                false
            }
        },
        Ok(None) => true,
        Err(e) => {
            error!("Error reading from storage: {}", e);
            false
        }
    }
}

/// Persists the sidebar flag. Failures are logged and swallowed; the
/// caller's in-memory state already changed and stays changed.
pub fn store_sidebar_open(store: &dyn KeyValueStore, open: bool) {
    let raw = if open { "true" } else { "false" };
    if let Err(e) = store.write(SIDEBAR_OPEN_KEY, raw) {
        error!("Error writing to storage: {}", e);
    }
}

/// Sidebar visibility with localStorage persistence.
///
/// Starts closed during the synchronous first render, loads the
/// persisted flag once the client effect runs, and writes every toggle
/// back. Returns the current flag and a toggle callback.
#[hook]
pub fn use_sidebar() -> (bool, Callback<()>) {
    let hydrated = use_state(|| false);
    let is_open = use_state(|| false);

    // client-side read after first render
    {
        let hydrated = hydrated.clone();
        let is_open = is_open.clone();
        use_effect_with((), move |_| {
            is_open.set(load_sidebar_open(&BrowserStore));
            hydrated.set(true);
            || ()
        });
    }

    // sync every change back to storage once hydrated
    {
        let open = *is_open;
        let hydrated = *hydrated;
        use_effect_with((open, hydrated), move |(open, hydrated)| {
            if *hydrated {
                store_sidebar_open(&BrowserStore, *open);
            }
            || ()
        });
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };

    (*is_open, toggle)
}


#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Read {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            })
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_fresh_session_defaults_to_open() {
        let store = MemoryStore::default();
        assert!(load_sidebar_open(&store));
    }

    #[test]
    fn test_toggle_persists_and_reads_back() {
        let store = MemoryStore::default();
        store_sidebar_open(&store, false);
        assert!(!load_sidebar_open(&store));
        store_sidebar_open(&store, true);
        assert!(load_sidebar_open(&store));
    }

    #[test]
    fn test_read_failure_falls_back_to_closed() {
        assert!(!load_sidebar_open(&BrokenStore));
    }

    #[test]
    fn test_write_failure_does_not_panic() {
        // persistence is skipped; the caller's state is unaffected
        store_sidebar_open(&BrokenStore, true);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_closed() {
        let store = MemoryStore::default();
        store.write(SIDEBAR_OPEN_KEY, "not-json").unwrap();
        assert!(!load_sidebar_open(&store));
    }

    #[test]
    fn test_flag_serialization_matches_json() {
        let store = MemoryStore::default();
        store_sidebar_open(&store, true);
        assert_eq!(
            store.read(SIDEBAR_OPEN_KEY).unwrap().as_deref(),
            Some("true")
        );
    }
}
