//! Turns the loose API object into an [`AirportRecord`].
//!
//! Nothing in here can fail. Missing fields fall back to "N/A" or zero,
//! unrecognized codes map to an explicit "Unknown ..." label, and malformed
//! sub-fields (runway dimensions, frequency pieces) are logged and skipped.

use crate::models::{
    coerce_text, AirportRecord, RawAirportData, RunwayRecord, RunwaySizeClass, NOT_AVAILABLE,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub fn owner_label(code: &str) -> &'static str {
    match code {
        "P" => "Public Airport",
        "R" => "Private Airport",
        "M" => "Military Airport",
        "J" => "Joint Use Airport",
        _ => "Unknown Owner",
    }
}

pub fn services_label(code: &str) -> &'static str {
    match code {
        "S" => "Full Service",
        "P" => "Partial Service",
        "L" => "Limited Service",
        "N" => "No Service",
        _ => "Unknown Services",
    }
}

pub fn tower_label(code: &str) -> &'static str {
    match code {
        "T" => "Tower Available",
        "N" => "No Tower",
        _ => "Unknown Tower",
    }
}

pub fn beacon_label(code: &str) -> &'static str {
    match code {
        "B" => "Beacon Available",
        "N" => "No Beacon",
        _ => "Unknown Beacon",
    }
}

pub fn surface_label(code: &str) -> &'static str {
    match code {
        "H" => "Hard Surface",
        "S" => "Soft Surface",
        "G" => "Grass",
        "W" => "Water",
        "A" => "Asphalt",
        "C" => "Concrete",
        "T" => "Tar",
        "U" => "Unpaved",
        _ => "Unknown Surface",
    }
}

/// Absent codes stay "N/A"; present ones go through `table`.
fn coded(raw: &RawAirportData, key: &str, table: fn(&str) -> &'static str) -> String {
    raw.text(key)
        .map(|code| table(&code).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Parses `"SERVICE,FREQ;SERVICE,FREQ"`.
///
/// Pieces without a comma are dropped. Later duplicates win.
pub fn parse_frequencies(source: &str) -> BTreeMap<String, String> {
    let mut freqs = BTreeMap::new();
    for piece in source.split(';') {
        match piece.split_once(',') {
            Some((service, freq)) => {
                freqs.insert(service.trim().to_string(), freq.trim().to_string());
            }
            None if !piece.trim().is_empty() => {
                debug!("Skipping malformed frequency entry '{}'", piece);
            }
            None => {}
        }
    }
    freqs
}

/// Parses a `"LENGTHxWIDTH"` runway dimension. Returns `None` if either half
/// is not a whole number.
pub fn parse_dimension(dimension: &str) -> Option<(u32, u32)> {
    let mut parts = dimension.split('x');
    let length = parts.next()?.trim().parse::<u32>().ok()?;
    let width = parts.next()?.trim().parse::<u32>().ok()?;
    Some((length, width))
}

fn runway_from(obj: &Map<String, Value>) -> RunwayRecord {
    let field = |key: &str| {
        obj.get(key)
            .and_then(coerce_text)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    let id = field("id");
    let dimension = field("dimension");
    let (length_units, width_units) = parse_dimension(&dimension).unwrap_or_else(|| {
        warn!(
            "Runway {}: could not parse dimension '{}', defaulting to 0x0",
            id, dimension
        );
        (0, 0)
    });

    RunwayRecord {
        id,
        dimension,
        surface_code: obj.get("surface").and_then(coerce_text),
        alignment: field("alignment"),
        length_units,
        width_units,
    }
}

/// Size class of the longest runway, or `None` when there are no runways.
pub fn classify_runways(runways: &[RunwayRecord]) -> Option<RunwaySizeClass> {
    runways
        .iter()
        .map(|r| r.length_units)
        .max()
        .map(RunwaySizeClass::from_longest)
}

/// Surface label of the first listed runway.
pub fn dominant_surface(runways: &[RunwayRecord]) -> String {
    runways
        .first()
        .map(|r| r.surface().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn normalize(raw: &RawAirportData, station_code: &str) -> AirportRecord {
    let text = |key: &str| raw.text(key).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let runways: Vec<RunwayRecord> = raw.runways().into_iter().map(runway_from).collect();
    let frequencies = raw
        .text("freqs")
        .map(|s| parse_frequencies(&s))
        .unwrap_or_default();

    AirportRecord {
        station_code: station_code.to_string(),
        icao_id: text("icaoId"),
        iata_id: raw.text("iataId"),
        faa_id: raw.text("faaId"),
        name: text("name"),
        state: text("state"),
        country: text("country"),
        source_tag: text("source"),
        type_tag: text("type"),
        owner_category: coded(raw, "owner", owner_label),
        priority: text("priority"),
        latitude: raw.number("lat").unwrap_or(0.0),
        longitude: raw.number("lon").unwrap_or(0.0),
        elevation_meters: raw.number("elev").map(|e| e.round() as i64).unwrap_or(0),
        magnetic_declination: text("magdec"),
        runway_count: runways.len(),
        runway_size_class: classify_runways(&runways),
        dominant_runway_surface: dominant_surface(&runways),
        services_category: coded(raw, "services", services_label),
        tower_status: coded(raw, "tower", tower_label),
        beacon_status: coded(raw, "beacon", beacon_label),
        operations_status: raw.text("operations"),
        annual_passengers: raw.text("passengers"),
        frequencies,
        runways,
    }
}
