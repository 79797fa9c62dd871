//! EDData Session Cache
//!
//! Client-side read-through cache for the EDData companion app: keeps
//! commander profile, fleet carrier and nearby-services data available
//! across page loads, with per-key TTLs and sign-out invalidation.

pub mod cache;
pub mod cmdr;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod storage;

pub use cache::SessionCache;
pub use cmdr::CmdrCache;
pub use config::Config;
