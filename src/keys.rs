//! Well-Known Cache Keys
//!
//! The key namespace shared between the cache and its UI collaborators,
//! plus the TTL table covering those keys.

use crate::cache::TtlPolicy;
use crate::config::Config;

/// Signed-in commander profile
pub const CMDR_PROFILE: &str = "cmdrProfile";

/// Commander's fleet carrier
pub const CMDR_FLEET_CARRIER: &str = "cmdrFleetCarrier";

/// Nearest-service lookup results
pub const CMDR_NEAREST_SERVICES: &str = "cmdrNearestServices";

/// Every key tied to the signed-in session. Cleared together on sign-out
/// or when a fetch reports the user as signed out.
pub const SESSION_KEYS: [&str; 3] = [CMDR_PROFILE, CMDR_FLEET_CARRIER, CMDR_NEAREST_SERVICES];

/// Builds the TTL table for the session keys from configuration.
///
/// Unmatched keys fall back to the profile window, the shortest of the
/// three, so unknown data errs toward refetching.
pub fn session_ttl_policy(config: &Config) -> TtlPolicy {
    TtlPolicy::new(config.profile_ttl)
        .with_key(CMDR_PROFILE, config.profile_ttl)
        .with_key(CMDR_FLEET_CARRIER, config.fleet_carrier_ttl)
        .with_key(CMDR_NEAREST_SERVICES, config.nearest_services_ttl)
}
