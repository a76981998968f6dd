use futures::future::join_all;
use std::sync::Arc;

use crate::{
    error::FetchError, model::WeatherRecord, normalize::normalize, provider::ObservationSource,
    registry::Location,
};

/// Fetch every location concurrently and normalize the successes.
///
/// One task is spawned per location and all of them are awaited before
/// returning. Failed locations are logged and left out; the survivors keep
/// their registry order and their index-based ids.
pub async fn load_records(
    source: Arc<dyn ObservationSource>,
    locations: &[Location],
) -> Vec<WeatherRecord> {
    let handles = locations.iter().copied().map(|location| {
        let source = Arc::clone(&source);
        tokio::spawn(async move { source.observe(&location).await })
    });

    let outcomes = join_all(handles).await;

    let records: Vec<WeatherRecord> = locations
        .iter()
        .zip(outcomes)
        .enumerate()
        .filter_map(|(index, (location, outcome))| {
            let observed = outcome.unwrap_or_else(|join_err| {
                Err(FetchError::Task {
                    city: location.name.to_string(),
                    message: join_err.to_string(),
                })
            });

            match observed {
                Ok(raw) => Some(normalize(location, index, &raw)),
                Err(err) => {
                    tracing::warn!(city = err.city(), error = %err, "skipping city");
                    None
                }
            }
        })
        .collect();

    tracing::info!(
        loaded = records.len(),
        requested = locations.len(),
        "weather records loaded"
    );

    records
}
