use crate::{config::Config, error::FetchError, model::RawObservation, registry::Location};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openmeteo;

pub use openmeteo::OpenMeteoSource;

/// Per-location source of current conditions.
#[async_trait]
pub trait ObservationSource: Send + Sync + Debug {
    async fn observe(&self, location: &Location) -> Result<RawObservation, FetchError>;
}

/// Construct the Open-Meteo source, honouring a configured base URL.
pub fn source_from_config(config: &Config) -> Arc<dyn ObservationSource> {
    let base_url = config.base_url();
    tracing::debug!(%base_url, "using Open-Meteo source");
    Arc::new(OpenMeteoSource::new(base_url))
}
