//! Output formatters for an [`AirportRecord`]: a plain-text report and the
//! key/value data handed to the card template.

use crate::models::{AirportRecord, NOT_AVAILABLE};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Fixed-order text report. Field order and labels are stable.
pub fn render_text(record: &AirportRecord) -> String {
    let mut lines = vec![
        format!("== {} Airport Information ==", record.name),
        format!("Station: {}", record.station_code),
        format!("ICAO Code: {}", record.icao_id),
        format!("IATA Code: {}", or_na(record.iata_id.as_deref())),
        format!("FAA Code: {}", or_na(record.faa_id.as_deref())),
        format!("Location: {}, {}", record.latitude, record.longitude),
        format!("State: {}", record.state),
        format!("Country: {}", record.country),
        format!("Elevation: {} m", record.elevation_meters),
        format!("Magnetic Declination: {}", record.magnetic_declination),
        format!("Source: {}", record.source_tag),
        format!("Type: {}", record.type_tag),
        format!("Owner: {}", record.owner_category),
        format!("Runway Count: {}", record.runway_count),
        format!("Runway Size: {}", record.runway_size_label()),
        format!("Runway Surface: {}", record.dominant_runway_surface),
        format!("Services: {}", record.services_category),
        format!("Tower: {}", record.tower_status),
        format!("Beacon: {}", record.beacon_status),
        format!("Operations: {}", or_na(record.operations_status.as_deref())),
        format!("Annual Passengers: {}", or_na(record.annual_passengers.as_deref())),
    ];

    if record.frequencies.is_empty() {
        lines.push(format!("Frequencies: {}", NOT_AVAILABLE));
    } else {
        lines.push("Frequencies:".to_string());
        for (service, freq) in &record.frequencies {
            lines.push(format!("  {}: {}", service, freq));
        }
    }
    lines.push(format!("Priority: {}", record.priority));

    lines.push(String::new());
    lines.push("== Runway Information ==".to_string());
    for runway in &record.runways {
        lines.push(format!("Runway: {}", runway.id));
        lines.push(format!("Dimensions: {}", runway.dimension));
        lines.push(format!("Surface: {}", runway.surface()));
        lines.push(format!("Alignment: {}", runway.alignment));
    }

    lines.join("\n")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateFrequency {
    pub service: String,
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateRunway {
    pub id: String,
    pub dimension: String,
    pub surface: String,
    pub alignment: String,
}

/// Values substituted into the airport card template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub station_code: String,
    pub current_time: String,
    pub name: String,
    pub icao_id: String,
    pub iata_id: String,
    pub faa_id: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub elev: i64,
    pub magdec: String,
    pub source: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub owner: String,
    pub rwy_num: usize,
    pub rwy_length: String,
    pub rwy_type: String,
    pub services: String,
    pub tower: String,
    pub beacon: String,
    pub operations: String,
    pub passengers: String,
    pub freqs: Vec<TemplateFrequency>,
    pub priority: String,
    pub runways: Vec<TemplateRunway>,
}

pub fn render_template_data(record: &AirportRecord) -> TemplateData {
    render_template_data_at(record, Local::now().naive_local())
}

/// Same as [`render_template_data`] with an explicit render time.
pub fn render_template_data_at(record: &AirportRecord, now: NaiveDateTime) -> TemplateData {
    TemplateData {
        station_code: record.station_code.clone(),
        current_time: now.format(TIME_FORMAT).to_string(),
        name: record.name.clone(),
        icao_id: record.icao_id.clone(),
        iata_id: or_na(record.iata_id.as_deref()).to_string(),
        faa_id: or_na(record.faa_id.as_deref()).to_string(),
        state: record.state.clone(),
        country: record.country.clone(),
        lat: record.latitude,
        lon: record.longitude,
        elev: record.elevation_meters,
        magdec: record.magnetic_declination.clone(),
        source: record.source_tag.clone(),
        type_tag: record.type_tag.clone(),
        owner: record.owner_category.clone(),
        rwy_num: record.runway_count,
        rwy_length: record.runway_size_label().to_string(),
        rwy_type: record.dominant_runway_surface.clone(),
        services: record.services_category.clone(),
        tower: record.tower_status.clone(),
        beacon: record.beacon_status.clone(),
        operations: or_na(record.operations_status.as_deref()).to_string(),
        passengers: record
            .annual_passengers
            .as_ref()
            .map(|p| format!("{} million", p))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        freqs: record
            .frequencies
            .iter()
            .map(|(service, frequency)| TemplateFrequency {
                service: service.clone(),
                frequency: frequency.clone(),
            })
            .collect(),
        priority: record.priority.clone(),
        runways: record
            .runways
            .iter()
            .map(|r| TemplateRunway {
                id: r.id.clone(),
                dimension: r.dimension.clone(),
                surface: r.surface().to_string(),
                alignment: r.alignment.clone(),
            })
            .collect(),
    }
}
