//! Cache Statistics Module
//!
//! Diagnostic counters for cache behavior. Purely observational: the
//! cache works identically whether or not anyone reads these.

use serde::Serialize;

// == Cache Stats ==
/// Counters for cache activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads that returned a fresh value
    pub hits: u64,
    /// Reads that returned nothing (absent, expired, or unreadable)
    pub misses: u64,
    /// Entries found stale and removed on the read path
    pub expired: u64,
    /// Writes dropped because of a storage or serialization failure
    pub dropped_writes: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the lazy-expiry counter.
    pub fn record_expired(&mut self) {
        self.expired += 1;
    }

    /// Increments the dropped-write counter.
    pub fn record_dropped_write(&mut self) {
        self.dropped_writes += 1;
    }
}
