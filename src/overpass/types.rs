// Overpass API response types.
// A cafe is an OSM node; unknown fields are kept so saved copies stay verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNNAMED_CAFE: &str = "Unnamed Cafe";
pub const NO_ADDRESS: &str = "Address not available";

/// A single cafe returned by the map data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Fields we don't interpret (`type`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cafe {
    /// The cafe's name, or a placeholder.
    pub fn display_name(&self) -> &str {
        self.tag("name").unwrap_or(UNNAMED_CAFE)
    }

    /// Street address, with house number when tagged.
    pub fn address(&self) -> String {
        match (self.tag("addr:street"), self.tag("addr:housenumber")) {
            (Some(street), Some(number)) => format!("{} {}", street, number),
            (Some(street), None) => street.to_string(),
            (None, _) => NO_ADDRESS.to_string(),
        }
    }

    /// Map search link for the cafe's position.
    pub fn map_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lon)
    }

    /// Non-empty tag value.
    fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Overpass interpreter response wrapper.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Cafe>,
}
