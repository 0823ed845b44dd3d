use crate::config::ApiConfig;
use crate::error::LookupError;
use crate::models::RawAirportData;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

pub const DEFAULT_ENDPOINT: &str = "https://aviationweather.gov/api/data/airport";

/// Thin client for the aviation-weather airport endpoint.
///
/// One GET per lookup, bounded by a total timeout. No retries and no caching.
pub struct AirportClient {
    client: Client,
    endpoint: String,
}

impl AirportClient {
    pub fn new(config: &ApiConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.base_url.clone(),
        })
    }

    /// Fetches the raw record for an already-normalized identifier.
    pub async fn fetch(&self, identifier: &str) -> Result<RawAirportData, LookupError> {
        info!("Fetching airport data for {}", identifier);

        let result = self.request(identifier).await;
        if let Err(e) = &result {
            error!("Airport lookup for {} failed: {}", identifier, e);
        }
        result
    }

    async fn request(&self, identifier: &str) -> Result<RawAirportData, LookupError> {
        let res = self
            .client
            .get(&self.endpoint)
            .query(&[("ids", identifier), ("format", "json")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = res.text().await?;
        debug!("Airport API returned {} bytes", body.len());
        parse_body(&body)
    }
}

/// Picks the first airport out of the API's JSON array.
pub fn parse_body(body: &str) -> Result<RawAirportData, LookupError> {
    let items: Vec<Value> =
        serde_json::from_str(body).map_err(|e| LookupError::InvalidBody(e.to_string()))?;

    match items.into_iter().next() {
        Some(Value::Object(map)) if !map.is_empty() => Ok(RawAirportData(map)),
        Some(Value::Object(_)) | Some(Value::Null) | None => Err(LookupError::NotFound),
        Some(other) => Err(LookupError::InvalidBody(format!(
            "expected an airport object, got {}",
            other
        ))),
    }
}
