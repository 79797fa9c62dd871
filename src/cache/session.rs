//! Session Cache Module
//!
//! The cache engine: TTL-checked reads, last-write-wins writes, explicit
//! deletes. Every operation is synchronous. Storage and serialization
//! failures are logged and swallowed rather than surfaced; callers always
//! proceed as if there were no cache.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock, TtlPolicy, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};
use crate::storage::CacheStore;

// == Session Cache ==
/// TTL key-value cache over a pluggable backing store.
///
/// Holds at most one entry per key. A read returns the stored value only
/// while it is within the key's freshness window; stale entries are
/// removed on the read path (lazy expiry, no background sweep). Within a
/// key the last completed write wins.
#[derive(Debug)]
pub struct SessionCache {
    /// Backing store holding serialized envelopes
    store: Box<dyn CacheStore>,
    /// Per-key freshness windows
    policy: TtlPolicy,
    /// Time source for write stamps and freshness checks
    clock: Box<dyn Clock>,
    /// Diagnostic counters
    stats: CacheStats,
}

impl SessionCache {
    // == Constructors ==
    /// Creates a cache over `store` using the system clock.
    pub fn new(store: Box<dyn CacheStore>, policy: TtlPolicy) -> Self {
        Self::with_clock(store, policy, Box::new(SystemClock))
    }

    /// Creates a cache with an explicit time source.
    pub fn with_clock(
        store: Box<dyn CacheStore>,
        policy: TtlPolicy,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            policy,
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Save ==
    /// Persists `value` under `key`, replacing any prior entry.
    ///
    /// Failures (invalid key, unserializable payload, unavailable storage)
    /// drop the write: they are counted, logged at debug level, and never
    /// reach the caller.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            self.stats.record_dropped_write();
            debug!(key, error = %e, "cache write dropped");
        }
    }

    fn try_save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        validate_key(key)?;
        let value = serde_json::to_value(value)?;
        let entry = CacheEntry::new(value, self.clock.now_ms());
        let raw = serde_json::to_string(&entry)?;
        self.store.set(key, &raw)
    }

    // == Load ==
    /// Returns the cached value for `key` if present and still fresh.
    ///
    /// `None` covers every other case: never written, expired, deleted,
    /// or unreadable. A cached JSON `null` is a hit and loads as
    /// `Some(Value::Null)` when `T` is `serde_json::Value`, keeping
    /// "cached nothing" distinguishable from "no cache".
    pub fn load<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        match self.try_load(key) {
            Ok(Some(value)) => {
                self.stats.record_hit();
                Some(value)
            }
            Ok(None) => {
                self.stats.record_miss();
                None
            }
            Err(e) => {
                self.stats.record_miss();
                debug!(key, error = %e, "cache read degraded to miss");
                None
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        validate_key(key)?;

        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        let entry: CacheEntry = serde_json::from_str(&raw)?;

        if entry.is_expired(self.policy.ttl_ms_for(key), self.clock.now_ms()) {
            // Lazy expiry: the stale entry is dropped on the read path.
            self.stats.record_expired();
            if let Err(e) = self.store.remove(key) {
                debug!(key, error = %e, "failed to remove expired entry");
            }
            return Ok(None);
        }

        let value = serde_json::from_value(entry.value)?;
        Ok(Some(value))
    }

    // == Delete ==
    /// Removes the entry for `key`. A no-op when the key is absent,
    /// invalid, or the store is unreachable.
    pub fn delete(&mut self, key: &str) {
        if validate_key(key).is_err() {
            return;
        }
        if let Err(e) = self.store.remove(key) {
            debug!(key, error = %e, "cache delete ignored");
        }
    }

    // == Stats ==
    /// Diagnostic counters accumulated since construction.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

// == Key Validation ==
/// Keys must be non-empty, bounded, and safe to use as file names.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "key exceeds maximum length of {MAX_KEY_LENGTH} bytes"
        )));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(CacheError::InvalidKey(format!(
            "key contains unsupported characters: {key}"
        )));
    }
    Ok(())
}
