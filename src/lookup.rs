//! Caller-facing entry point: identifier in, text report or rendered card out.

use crate::api::AirportClient;
use crate::config::RenderConfig;
use crate::error::LookupError;
use crate::format::{render_template_data, render_text};
use crate::normalize::normalize;
use crate::render::{RenderedImage, TemplateRenderer, Viewport};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutput {
    Text(String),
    Image(RenderedImage),
}

/// Takes the first whitespace-separated token and uppercases it.
pub fn normalize_identifier(input: &str) -> Result<String, LookupError> {
    input
        .split_whitespace()
        .next()
        .map(str::to_uppercase)
        .ok_or(LookupError::MissingIdentifier)
}

/// Runs one lookup end to end. `raw_text` selects the plain-text report
/// instead of the rendered card.
pub async fn lookup(
    client: &AirportClient,
    renderer: &dyn TemplateRenderer,
    render: &RenderConfig,
    identifier: &str,
    raw_text: bool,
) -> Result<LookupOutput, LookupError> {
    let station_code = normalize_identifier(identifier)?;
    let raw = client.fetch(&station_code).await?;
    let record = normalize(&raw, &station_code);
    info!(
        "Resolved {} to '{}' ({} runways)",
        station_code, record.name, record.runway_count
    );

    if raw_text {
        return Ok(LookupOutput::Text(render_text(&record)));
    }

    let data = render_template_data(&record);
    let image = renderer
        .render(&render.template_name, &data, &Viewport::from(render))
        .map_err(|e| LookupError::Render(e.to_string()))?;
    Ok(LookupOutput::Image(image))
}
