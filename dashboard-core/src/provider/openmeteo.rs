use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::FetchError,
    model::{ForecastResponse, RawObservation},
    registry::Location,
};

use super::ObservationSource;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,weather_code,surface_pressure,wind_speed_10m,visibility";

#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    base_url: String,
    http: Client,
}

impl OpenMeteoSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ObservationSource for OpenMeteoSource {
    async fn observe(&self, location: &Location) -> Result<RawObservation, FetchError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let city = location.name;

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string().as_str()),
                ("longitude", location.longitude.to_string().as_str()),
                ("current", CURRENT_FIELDS),
                ("wind_speed_unit", "ms"),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Request { city: city.to_string(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Request { city: city.to_string(), source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                city: city.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { city: city.to_string(), source })?;

        tracing::debug!(city, code = parsed.current.weather_code, "observation received");
        Ok(parsed.current)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
