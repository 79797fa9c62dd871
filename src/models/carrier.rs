//! Fleet Carrier Models
//!
//! Typed view of the fleet carrier payload cached under
//! `cmdrFleetCarrier`. The upstream API hex-encodes the vanity name and
//! returns the credit balance as either a number or a numeric string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Total cargo capacity of a fleet carrier, in tonnes.
pub const CARRIER_CARGO_CAPACITY: u32 = 25_000;

/// Fleet carrier as cached under `cmdrFleetCarrier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetCarrier {
    #[serde(default)]
    pub name: Option<CarrierName>,
    #[serde(default)]
    pub current_star_system: Option<String>,
    #[serde(default)]
    pub balance: Option<Value>,
    #[serde(default)]
    pub capacity: Option<CarrierCapacity>,
}

impl FleetCarrier {
    /// Credit balance, coercing the upstream string-or-number field.
    pub fn balance_credits(&self) -> Option<i64> {
        match self.balance.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Carrier identification: callsign plus hex-encoded vanity name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierName {
    pub callsign: String,
    #[serde(default)]
    pub vanity_name: Option<String>,
}

impl CarrierName {
    /// Decodes the hex-encoded vanity name to ASCII, as shown in the UI.
    ///
    /// Returns `None` when the field is missing or not valid hex.
    pub fn decoded_vanity_name(&self) -> Option<String> {
        hex_to_ascii(self.vanity_name.as_deref()?)
    }
}

/// Cargo capacity usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierCapacity {
    #[serde(default)]
    pub free_space: Option<u32>,
}

impl CarrierCapacity {
    /// Tonnes of cargo currently aboard.
    pub fn used_space(&self) -> Option<u32> {
        self.free_space
            .map(|free| CARRIER_CARGO_CAPACITY.saturating_sub(free))
    }
}

fn hex_to_ascii(hex: &str) -> Option<String> {
    if hex.is_empty() || hex.len() % 2 != 0 {
        return None;
    }
    let mut out = String::with_capacity(hex.len() / 2);
    for chunk in hex.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(chunk).ok()?;
        let byte = u8::from_str_radix(pair, 16).ok()?;
        out.push(byte as char);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_carrier() {
        let raw = r#"{
            "name": {"callsign": "K7F-B2X", "vanityName": "464C454554"},
            "currentStarSystem": "Deciat",
            "balance": "1234567890",
            "capacity": {"freeSpace": 20000}
        }"#;

        let carrier: FleetCarrier = serde_json::from_str(raw).unwrap();

        assert_eq!(carrier.name.as_ref().unwrap().callsign, "K7F-B2X");
        assert_eq!(carrier.current_star_system.as_deref(), Some("Deciat"));
        assert_eq!(carrier.balance_credits(), Some(1_234_567_890));
        assert_eq!(carrier.capacity.as_ref().unwrap().used_space(), Some(5_000));
    }

    #[test]
    fn test_vanity_name_decodes_from_hex() {
        let name = CarrierName {
            callsign: "K7F-B2X".to_string(),
            vanity_name: Some("464C454554".to_string()),
        };
        assert_eq!(name.decoded_vanity_name().as_deref(), Some("FLEET"));
    }

    #[test]
    fn test_vanity_name_invalid_hex_is_none() {
        let name = CarrierName {
            callsign: "K7F-B2X".to_string(),
            vanity_name: Some("ZZ".to_string()),
        };
        assert_eq!(name.decoded_vanity_name(), None);

        let name = CarrierName {
            callsign: "K7F-B2X".to_string(),
            vanity_name: None,
        };
        assert_eq!(name.decoded_vanity_name(), None);
    }

    #[test]
    fn test_balance_accepts_number_or_string() {
        let carrier: FleetCarrier =
            serde_json::from_value(json!({"balance": 42})).unwrap();
        assert_eq!(carrier.balance_credits(), Some(42));

        let carrier: FleetCarrier =
            serde_json::from_value(json!({"balance": "42"})).unwrap();
        assert_eq!(carrier.balance_credits(), Some(42));

        let carrier: FleetCarrier = serde_json::from_value(json!({})).unwrap();
        assert_eq!(carrier.balance_credits(), None);
    }
}
