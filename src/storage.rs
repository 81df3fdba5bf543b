//! Durable key-value preferences.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{js_message, WebstoreError};

/// A string key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), WebstoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WebstoreError> {
        (**self).set(key, value)
    }
}

/// `window.localStorage`. Reads as empty when storage is unavailable.
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            tracing::debug!("localStorage unavailable, preferences will not persist");
        }
        Self { inner }
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WebstoreError> {
        let storage = self
            .inner
            .as_ref()
            .ok_or_else(|| WebstoreError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| WebstoreError::Storage(js_message(&e)))
    }
}

/// In-memory store. Can be told to reject writes to mimic a full or
/// blocked `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            values: RefCell::default(),
            read_only: true,
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WebstoreError> {
        if self.read_only {
            return Err(WebstoreError::Storage("store is read-only".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
