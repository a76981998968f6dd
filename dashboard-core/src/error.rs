use thiserror::Error;

/// Why a single location produced no observation.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {city} failed: {source}")]
    Request {
        city: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Forecast request for {city} failed with status {status}: {body}")]
    Status {
        city: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse forecast JSON for {city}: {source}")]
    Decode {
        city: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fetch task for {city} did not complete: {message}")]
    Task { city: String, message: String },
}

impl FetchError {
    pub fn city(&self) -> &str {
        match self {
            Self::Request { city, .. }
            | Self::Status { city, .. }
            | Self::Decode { city, .. }
            | Self::Task { city, .. } => city,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown temperature band '{0}'. Supported bands: all, hot, warm, cold.")]
pub struct ParseBandError(pub String);
