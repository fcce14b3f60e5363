//! In-memory document store
//!
//! Holds renderings in a map. Useful when the real message storage lives
//! elsewhere (a chat client keeps its own messages) and in tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;

use super::DocumentStore;
use crate::domain::DocumentKey;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<DocumentKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> Result<MutexGuard<'_, HashMap<DocumentKey, String>>> {
        self.documents
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))
    }
}

impl DocumentStore for MemoryStore {
    type Guard = ();

    /// No-op: callers must not run two transactions on one key at once
    fn lock(&self, _key: &DocumentKey) -> Result<()> {
        Ok(())
    }

    fn fetch(&self, key: &DocumentKey) -> Result<Option<String>> {
        Ok(self.documents()?.get(key).cloned())
    }

    fn overwrite(&self, key: &DocumentKey, text: &str) -> Result<()> {
        self.documents()?.insert(key.clone(), text.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<DocumentKey>> {
        let mut keys: Vec<_> = self.documents()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_replaces_previous_text() {
        let store = MemoryStore::new();
        let key: DocumentKey = "t1".parse().unwrap();

        assert_eq!(store.fetch(&key).unwrap(), None);
        store.overwrite(&key, "one").unwrap();
        store.overwrite(&key, "two").unwrap();

        assert_eq!(store.fetch(&key).unwrap().as_deref(), Some("two"));
        assert_eq!(store.keys().unwrap(), vec![key]);
    }
}
