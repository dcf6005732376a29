use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference storage is not available")]
    Unavailable,

    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Small string key/value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Browser `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-process store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().map_err(|e| PreferenceError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
