//! Commander Cache Facade
//!
//! The typed, key-aware surface the UI layer consumes: one accessor pair
//! per well-known key, plus the sign-out teardown. The facade decides
//! nothing about authentication itself; callers clear the session when
//! they detect a sign-out or an auth failure.

use tracing::warn;

use crate::cache::{CacheStats, SessionCache};
use crate::config::Config;
use crate::keys;
use crate::models::{CmdrProfile, FleetCarrier, NearestServices};
use crate::storage::{CacheStore, FileStore, MemoryStore};

/// Typed cache for signed-in commander data.
#[derive(Debug)]
pub struct CmdrCache {
    cache: SessionCache,
}

impl CmdrCache {
    /// Opens the on-disk cache at the configured directory.
    ///
    /// When the directory cannot be prepared the cache falls back to an
    /// in-memory store: callers still get within-process reuse, and
    /// storage unavailability is never fatal.
    pub fn open(config: &Config) -> Self {
        let store: Box<dyn CacheStore> = match FileStore::open(&config.cache_dir) {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!(error = %e, "cache directory unavailable, falling back to in-memory store");
                Box::new(MemoryStore::new())
            }
        };
        Self {
            cache: SessionCache::new(store, keys::session_ttl_policy(config)),
        }
    }

    /// In-memory cache with the same TTL table, for tests and previews.
    pub fn in_memory(config: &Config) -> Self {
        Self {
            cache: SessionCache::new(
                Box::new(MemoryStore::new()),
                keys::session_ttl_policy(config),
            ),
        }
    }

    // == Profile ==
    /// Last known commander profile, if still fresh.
    pub fn profile(&mut self) -> Option<CmdrProfile> {
        self.cache.load(keys::CMDR_PROFILE)
    }

    /// Stores the profile after a successful fetch.
    pub fn save_profile(&mut self, profile: &CmdrProfile) {
        self.cache.save(keys::CMDR_PROFILE, profile);
    }

    // == Fleet Carrier ==
    /// Last known fleet carrier data, if still fresh.
    pub fn fleet_carrier(&mut self) -> Option<FleetCarrier> {
        self.cache.load(keys::CMDR_FLEET_CARRIER)
    }

    /// Stores fleet carrier data after a successful fetch.
    pub fn save_fleet_carrier(&mut self, carrier: &FleetCarrier) {
        self.cache.save(keys::CMDR_FLEET_CARRIER, carrier);
    }

    // == Nearest Services ==
    /// Last known nearest-service lookups, if still fresh.
    pub fn nearest_services(&mut self) -> Option<NearestServices> {
        self.cache.load(keys::CMDR_NEAREST_SERVICES)
    }

    /// Stores the nearest-service fan-out results.
    pub fn save_nearest_services(&mut self, services: &NearestServices) {
        self.cache.save(keys::CMDR_NEAREST_SERVICES, services);
    }

    // == Session Teardown ==
    /// Sign-out teardown: removes every session key regardless of TTL
    /// state. Subsequent reads miss until the next sign-in refetch.
    pub fn clear_session(&mut self) {
        for key in keys::SESSION_KEYS {
            self.cache.delete(key);
        }
    }

    /// Diagnostic counters from the underlying engine.
    pub fn stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}
