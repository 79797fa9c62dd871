//! Nearest Services Models
//!
//! Results of the nearest-service fan-out, cached under
//! `cmdrNearestServices`: one lookup per service label, each either a
//! list of candidate stations or an unavailable marker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Map from service label (e.g. "Shipyard") to its lookup result.
pub type NearestServices = BTreeMap<String, ServiceLookup>;

/// One nearest-service lookup.
///
/// The upstream endpoint returns a station list on success and an
/// `{error, service}` object when the lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceLookup {
    Stations(Vec<Station>),
    Unavailable(ServiceError),
}

impl ServiceLookup {
    /// Candidate stations, empty when the lookup failed.
    pub fn stations(&self) -> &[Station] {
        match self {
            ServiceLookup::Stations(stations) => stations,
            ServiceLookup::Unavailable(_) => &[],
        }
    }

    /// True when the lookup came back as a service error.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ServiceLookup::Unavailable(_))
    }

    /// Stations offering the service in the commander's current system.
    pub fn in_system(&self) -> impl Iterator<Item = &Station> {
        self.stations().iter().filter(|s| s.distance == 0.0)
    }
}

/// A station candidate returned by a nearest-service lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub station_name: String,
    #[serde(default)]
    pub station_type: Option<String>,
    #[serde(default)]
    pub system_name: Option<String>,
    #[serde(default)]
    pub body_name: Option<String>,
    /// Distance from the commander's system in light years
    #[serde(default)]
    pub distance: f64,
}

/// Marker stored when a service lookup failed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    pub error: String,
    #[serde(default)]
    pub service: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_station_list() {
        let raw = json!([
            {"stationName": "Jameson Memorial", "stationType": "Coriolis", "distance": 0},
            {"stationName": "Founders Rest", "stationType": "Outpost", "distance": 12.5}
        ]);

        let lookup: ServiceLookup = serde_json::from_value(raw).unwrap();

        assert!(!lookup.is_unavailable());
        assert_eq!(lookup.stations().len(), 2);
        assert_eq!(lookup.in_system().count(), 1);
        assert_eq!(
            lookup.in_system().next().unwrap().station_name,
            "Jameson Memorial"
        );
    }

    #[test]
    fn test_deserialize_service_error() {
        let raw = json!({"error": "Service temporarily unavailable (502)", "service": "shipyard"});

        let lookup: ServiceLookup = serde_json::from_value(raw).unwrap();

        assert!(lookup.is_unavailable());
        assert!(lookup.stations().is_empty());
        assert_eq!(lookup.in_system().count(), 0);
    }

    #[test]
    fn test_nearest_services_map() {
        let raw = json!({
            "Shipyard": [{"stationName": "Jameson Memorial", "distance": 0}],
            "Material Trader": {"error": "Service temporarily unavailable"}
        });

        let services: NearestServices = serde_json::from_value(raw).unwrap();

        assert_eq!(services.len(), 2);
        assert!(!services["Shipyard"].is_unavailable());
        assert!(services["Material Trader"].is_unavailable());
    }
}
