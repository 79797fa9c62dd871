//! Cache Entry Module
//!
//! The envelope written to the backing store: a JSON payload plus its
//! write timestamp.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Cache Entry ==
/// A single cached entry.
///
/// Entries are immutable once written: overwriting a key replaces the
/// whole envelope, there is no merging. Freshness is judged lazily at
/// read time against the configured TTL for the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored payload (any JSON value, including `null`)
    pub value: Value,
    /// Write timestamp (Unix milliseconds)
    pub written_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the given write time.
    pub fn new(value: Value, written_at: u64) -> Self {
        Self { value, written_at }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl_ms` as of `now_ms`.
    ///
    /// Boundary condition: a read at exactly `written_at + ttl_ms` still
    /// counts as fresh; the entry is stale only once the freshness window
    /// has fully elapsed. A clock that moved backwards yields age zero,
    /// which also counts as fresh.
    pub fn is_expired(&self, ttl_ms: u64, now_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    // == Age ==
    /// Age of the entry in milliseconds as of `now_ms`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.written_at)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_fresh_within_window() {
        let entry = CacheEntry::new(json!({"a": 1}), 1_000);

        assert!(!entry.is_expired(500, 1_000));
        assert!(!entry.is_expired(500, 1_250));
    }

    #[test]
    fn test_entry_fresh_at_exact_boundary() {
        let entry = CacheEntry::new(json!("v"), 1_000);

        // Read at written_at + ttl is the last fresh instant
        assert!(!entry.is_expired(500, 1_500));
        assert!(entry.is_expired(500, 1_501));
    }

    #[test]
    fn test_entry_expired_after_window() {
        let entry = CacheEntry::new(json!("v"), 0);

        assert!(entry.is_expired(300_000, 400_000));
    }

    #[test]
    fn test_entry_clock_moved_backwards() {
        let entry = CacheEntry::new(json!("v"), 2_000);

        // now < written_at: age saturates to zero, entry stays fresh
        assert_eq!(entry.age_ms(1_000), 0);
        assert!(!entry.is_expired(100, 1_000));
    }

    #[test]
    fn test_entry_roundtrips_through_json() {
        let entry = CacheEntry::new(json!({"commander": {"name": "Jameson"}}), 123_456);

        let raw = serde_json::to_string(&entry).unwrap();
        let decoded: CacheEntry = serde_json::from_str(&raw).unwrap();

        assert_eq!(decoded.written_at, 123_456);
        assert_eq!(decoded.value, entry.value);
    }

    #[test]
    fn test_entry_preserves_null_payload() {
        let entry = CacheEntry::new(Value::Null, 1);

        let raw = serde_json::to_string(&entry).unwrap();
        let decoded: CacheEntry = serde_json::from_str(&raw).unwrap();

        assert_eq!(decoded.value, Value::Null);
    }
}
