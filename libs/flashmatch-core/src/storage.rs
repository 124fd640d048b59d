//! String key-value storage and the preferences kept in it.

use crate::error::StorageError;
use crate::types::Theme;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Key holding the JSON-serialized best-time map.
pub const BEST_TIMES_KEY: &str = "flashdash-best-times";

/// Key holding the theme preference.
pub const THEME_KEY: &str = "flashdash-theme";

/// Durable string-keyed storage.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the theme preference, defaulting to light.
pub fn load_theme(storage: &dyn KeyValueStorage) -> Theme {
    storage
        .get(THEME_KEY)
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or_default()
}

/// Persist the theme preference.
pub fn save_theme(storage: &dyn KeyValueStorage, theme: Theme) -> Result<(), StorageError> {
    storage.set(THEME_KEY, theme.as_str())
}
