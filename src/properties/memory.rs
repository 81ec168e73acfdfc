use std::collections::HashMap;
use std::sync::RwLock;

use super::PropertyStore;

/// An in-memory security property registry.
///
/// Writers may update the registry while resolvers read from it; a reader
/// racing a `set` observes either the old value or the new one, never a
/// partial write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .unwrap()
            .insert(key.into(), value.into());
    }

    /// Removes `key` from the registry.
    pub fn remove(&self, key: &str) {
        self.values.write().unwrap().remove(key);
    }

    /// Returns the number of properties currently set.
    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    /// Returns `true` when no properties are set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}
