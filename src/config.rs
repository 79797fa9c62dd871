//! Configuration Module
//!
//! Cache directory and per-key TTL settings, loaded from environment
//! variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default on-disk cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "eddata-data/cache";

/// Default freshness window for the commander profile (5 minutes).
pub const DEFAULT_PROFILE_TTL_MS: u64 = 300_000;

/// Default freshness window for fleet carrier data (5 minutes).
pub const DEFAULT_FLEET_CARRIER_TTL_MS: u64 = 300_000;

/// Default freshness window for nearest-service lookups (1 hour).
///
/// Deliberately much longer than the profile windows: recomputing these
/// fans out one request per service type.
pub const DEFAULT_NEAREST_SERVICES_TTL_MS: u64 = 3_600_000;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the on-disk cache files
    pub cache_dir: PathBuf,
    /// Freshness window for the commander profile
    pub profile_ttl: Duration,
    /// Freshness window for fleet carrier data
    pub fleet_carrier_ttl: Duration,
    /// Freshness window for nearest-service lookups
    pub nearest_services_ttl: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EDDATA_CACHE_DIR` - cache directory (default: `eddata-data/cache`)
    /// - `EDDATA_PROFILE_TTL_MS` - profile TTL in milliseconds (default: 300000)
    /// - `EDDATA_FLEET_CARRIER_TTL_MS` - fleet carrier TTL in milliseconds (default: 300000)
    /// - `EDDATA_NEAREST_SERVICES_TTL_MS` - nearest-services TTL in milliseconds (default: 3600000)
    pub fn from_env() -> Self {
        Self {
            cache_dir: env::var("EDDATA_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR)),
            profile_ttl: ttl_from_env("EDDATA_PROFILE_TTL_MS", DEFAULT_PROFILE_TTL_MS),
            fleet_carrier_ttl: ttl_from_env(
                "EDDATA_FLEET_CARRIER_TTL_MS",
                DEFAULT_FLEET_CARRIER_TTL_MS,
            ),
            nearest_services_ttl: ttl_from_env(
                "EDDATA_NEAREST_SERVICES_TTL_MS",
                DEFAULT_NEAREST_SERVICES_TTL_MS,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            profile_ttl: Duration::from_millis(DEFAULT_PROFILE_TTL_MS),
            fleet_carrier_ttl: Duration::from_millis(DEFAULT_FLEET_CARRIER_TTL_MS),
            nearest_services_ttl: Duration::from_millis(DEFAULT_NEAREST_SERVICES_TTL_MS),
        }
    }
}

fn ttl_from_env(var: &str, default_ms: u64) -> Duration {
    Duration::from_millis(
        env::var(var)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_ms),
    )
}
