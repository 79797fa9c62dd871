//! Commander Profile Models
//!
//! Typed view of the profile payload returned by the companion API.
//! Unknown fields are ignored; the upstream schema is not ours to pin.

use serde::{Deserialize, Serialize};

/// Commander profile as cached under `cmdrProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdrProfile {
    #[serde(default)]
    pub commander: Option<Commander>,
    #[serde(default)]
    pub ship: Option<Ship>,
    #[serde(default)]
    pub last_system: Option<LastSystem>,
}

impl CmdrProfile {
    /// A profile counts as signed in when the API returned a commander id.
    pub fn is_signed_in(&self) -> bool {
        self.commander.as_ref().is_some_and(|c| c.id != 0)
    }
}

/// The commander record inside a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commander {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub credits: i64,
}

/// Currently boarded ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    #[serde(default)]
    pub ship_name: Option<String>,
    #[serde(default, rename = "shipID")]
    pub ship_id: Option<String>,
}

/// Last star system the commander was seen in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSystem {
    pub name: String,
}
