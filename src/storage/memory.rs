//! In-Memory Store
//!
//! HashMap-backed store for tests and for degraded mode when the cache
//! directory is unavailable. Contents last only for the process lifetime.

use std::collections::HashMap;

use crate::error::Result;
use crate::storage::CacheStore;

/// Ephemeral in-memory backing store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored envelopes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        self.entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
