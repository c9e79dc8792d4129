use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{KeyValueStore, StorageError};

/// In-process store. Clones share the same map, so a test can keep a handle
/// while the editor owns the boxed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.insert(key, value);
        store
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
