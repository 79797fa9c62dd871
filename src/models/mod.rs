//! Data Models
//!
//! Typed payloads for each well-known cache key, shaped after what the
//! UI actually renders rather than the full upstream schemas.

mod carrier;
mod cmdr;
mod services;

pub use carrier::{CarrierCapacity, CarrierName, FleetCarrier, CARRIER_CARGO_CAPACITY};
pub use cmdr::{CmdrProfile, Commander, LastSystem, Ship};
pub use services::{NearestServices, ServiceError, ServiceLookup, Station};
