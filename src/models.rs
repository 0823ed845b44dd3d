use crate::normalize::surface_label;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Placeholder for any field the API left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// First element of the airport API response, kept as a loose JSON object.
///
/// The upstream schema drifts between numbers and strings for several
/// fields, so accessors coerce instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawAirportData(pub Map<String, Value>);

impl RawAirportData {
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(coerce_text)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Runway objects in the order the API listed them. Non-object entries
    /// are ignored.
    pub fn runways(&self) -> Vec<&Map<String, Value>> {
        match self.0.get("runways") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
            _ => Vec::new(),
        }
    }
}

/// Best-effort string view of a JSON scalar. Blank strings count as absent.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Classification of an airport by its longest runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunwaySizeClass {
    Small,
    Medium,
    Large,
}

impl RunwaySizeClass {
    pub fn from_longest(length: u32) -> Self {
        match length {
            l if l > 12_000 => RunwaySizeClass::Large,
            l if l > 6_000 => RunwaySizeClass::Medium,
            _ => RunwaySizeClass::Small,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RunwaySizeClass::Small => "Small Airport",
            RunwaySizeClass::Medium => "Medium Airport",
            RunwaySizeClass::Large => "Large Airport",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunwayRecord {
    pub id: String,
    /// `LENGTHxWIDTH` exactly as the API sent it.
    pub dimension: String,
    pub surface_code: Option<String>,
    pub alignment: String,
    /// Zero when the dimension string could not be parsed.
    pub length_units: u32,
    pub width_units: u32,
}

impl RunwayRecord {
    /// Readable surface, or "N/A" when the API gave none.
    pub fn surface(&self) -> &'static str {
        self.surface_code
            .as_deref()
            .map(surface_label)
            .unwrap_or(NOT_AVAILABLE)
    }
}

/// Normalized view of one airport, built fresh for every query.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    // Identity
    pub station_code: String,
    pub icao_id: String,
    pub iata_id: Option<String>,
    pub faa_id: Option<String>,

    // Descriptive
    pub name: String,
    pub state: String,
    pub country: String,
    pub source_tag: String,
    pub type_tag: String,
    pub owner_category: String,
    pub priority: String,

    // Geospatial
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_meters: i64,
    pub magnetic_declination: String,

    // Derived classification
    pub runway_count: usize,
    pub runway_size_class: Option<RunwaySizeClass>,
    pub dominant_runway_surface: String,

    // Operational
    pub services_category: String,
    pub tower_status: String,
    pub beacon_status: String,
    pub operations_status: Option<String>,
    pub annual_passengers: Option<String>,

    pub frequencies: BTreeMap<String, String>,
    pub runways: Vec<RunwayRecord>,
}

impl AirportRecord {
    pub fn runway_size_label(&self) -> &'static str {
        self.runway_size_class
            .map(RunwaySizeClass::label)
            .unwrap_or(NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawAirportData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_coerces_numbers_and_drops_blanks() {
        let data = raw(json!({ "priority": 3, "iataId": "  ", "name": " Kennedy " }));
        assert_eq!(data.text("priority").as_deref(), Some("3"));
        assert_eq!(data.text("iataId"), None);
        assert_eq!(data.text("name").as_deref(), Some("Kennedy"));
        assert_eq!(data.text("missing"), None);
    }

    #[test]
    fn number_accepts_numeric_strings() {
        let data = raw(json!({ "elev": "4", "lat": 40.6398, "lon": "west" }));
        assert_eq!(data.number("elev"), Some(4.0));
        assert_eq!(data.number("lat"), Some(40.6398));
        assert_eq!(data.number("lon"), None);
    }

    #[test]
    fn runways_skip_non_objects() {
        let data = raw(json!({ "runways": [{ "id": "04L/22R" }, "junk", null] }));
        assert_eq!(data.runways().len(), 1);
    }

    #[test]
    fn size_class_boundaries() {
        assert_eq!(RunwaySizeClass::from_longest(12_001), RunwaySizeClass::Large);
        assert_eq!(RunwaySizeClass::from_longest(12_000), RunwaySizeClass::Medium);
        assert_eq!(RunwaySizeClass::from_longest(6_001), RunwaySizeClass::Medium);
        assert_eq!(RunwaySizeClass::from_longest(6_000), RunwaySizeClass::Small);
        assert_eq!(RunwaySizeClass::from_longest(0), RunwaySizeClass::Small);
    }
}
