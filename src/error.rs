//! Failure modes of a single airport lookup.
//!
//! Every variant is terminal for the query. None of them trigger a retry, and
//! each one carries a distinct message that is shown to the user in place of
//! a record.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The caller gave no identifier at all.
    #[error("Please provide an ICAO code")]
    MissingIdentifier,

    /// The upstream API answered with a non-2xx status.
    #[error("Failed to fetch airport data (HTTP {0})")]
    HttpStatus(u16),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure (DNS, refused, reset, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body was not the JSON array the API is documented to return.
    #[error("Unexpected response from airport API: {0}")]
    InvalidBody(String),

    /// Empty result array, or an empty first element.
    #[error("Airport information not found")]
    NotFound,

    /// The external template renderer refused the data.
    #[error("Failed to render airport card: {0}")]
    Render(String),

    /// The HTTP client itself could not be built.
    #[error("Could not initialize HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout
        } else if let Some(status) = e.status() {
            LookupError::HttpStatus(status.as_u16())
        } else if e.is_decode() {
            LookupError::InvalidBody(e.to_string())
        } else {
            LookupError::Transport(e.to_string())
        }
    }
}
