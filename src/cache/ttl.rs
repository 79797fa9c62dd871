//! TTL Policy Module
//!
//! Per-key freshness windows. The cache engine is agnostic to what a key
//! means; callers supply a policy mapping keys to TTLs at construction.

use std::time::Duration;

/// Fallback freshness window for keys with no matching rule.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
enum KeyMatcher {
    Exact(String),
    Prefix(String),
}

#[derive(Debug, Clone)]
struct TtlRule {
    matcher: KeyMatcher,
    ttl: Duration,
}

// == TTL Policy ==
/// Lookup table from cache key to freshness window.
///
/// Resolution order: exact key match first, then the longest matching
/// prefix rule, then the default.
#[derive(Debug, Clone)]
pub struct TtlPolicy {
    rules: Vec<TtlRule>,
    default_ttl: Duration,
}

impl TtlPolicy {
    // == Constructor ==
    /// Creates a policy where unmatched keys use `default_ttl`.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            rules: Vec::new(),
            default_ttl,
        }
    }

    /// Adds an exact-match rule for `key`.
    pub fn with_key(mut self, key: impl Into<String>, ttl: Duration) -> Self {
        self.rules.push(TtlRule {
            matcher: KeyMatcher::Exact(key.into()),
            ttl,
        });
        self
    }

    /// Adds a prefix-match rule covering every key starting with `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>, ttl: Duration) -> Self {
        self.rules.push(TtlRule {
            matcher: KeyMatcher::Prefix(prefix.into()),
            ttl,
        });
        self
    }

    // == Lookup ==
    /// Resolves the freshness window for `key`.
    pub fn ttl_for(&self, key: &str) -> Duration {
        for rule in &self.rules {
            if let KeyMatcher::Exact(exact) = &rule.matcher {
                if exact == key {
                    return rule.ttl;
                }
            }
        }

        self.rules
            .iter()
            .filter_map(|rule| match &rule.matcher {
                KeyMatcher::Prefix(prefix) if key.starts_with(prefix.as_str()) => {
                    Some((prefix.len(), rule.ttl))
                }
                _ => None,
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, ttl)| ttl)
            .unwrap_or(self.default_ttl)
    }

    /// Resolves the freshness window for `key` in milliseconds.
    pub fn ttl_ms_for(&self, key: &str) -> u64 {
        self.ttl_for(key).as_millis() as u64
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
