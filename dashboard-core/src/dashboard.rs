//! Loading/ready state and the views derived from a ready snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    chart,
    filter::filter,
    loader::load_records,
    model::{AggregateSummary, ChartBar, FilterCriteria, TemperatureBar, WeatherRecord},
    provider::ObservationSource,
    registry::{self, Location},
    summary::summarize,
};

/// What the presentation layer sees.
#[derive(Debug, Clone, Default)]
pub enum Dashboard {
    #[default]
    Loading,
    Ready(Snapshot),
}

impl Dashboard {
    /// Fetch all `locations` and move to `Ready`.
    ///
    /// Always ends in `Ready`, possibly with fewer records than locations.
    pub async fn load(source: Arc<dyn ObservationSource>, locations: &[Location]) -> Self {
        let records = load_records(source, locations).await;
        Self::Ready(Snapshot::new(records))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Empty while loading.
    pub fn records(&self) -> &[WeatherRecord] {
        match self {
            Self::Loading => &[],
            Self::Ready(snapshot) => snapshot.records(),
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Loading => None,
            Self::Ready(snapshot) => Some(snapshot),
        }
    }
}

/// Immutable record set of one fetch cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    records: Vec<WeatherRecord>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self::at(records, Utc::now())
    }

    pub fn at(records: Vec<WeatherRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self { records, fetched_at }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn summary(&self) -> AggregateSummary {
        summarize(&self.records)
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<WeatherRecord> {
        filter(&self.records, criteria)
    }

    pub fn temperature_series(&self) -> Vec<TemperatureBar> {
        chart::temperature_series(&self.records)
    }

    pub fn condition_distribution(&self) -> Vec<ChartBar> {
        chart::condition_distribution(&self.records)
    }

    pub fn find(&self, id: u32) -> Option<&WeatherRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Detail view for `id`, or `None` when this cycle has no such record.
    pub fn detail(&self, id: u32) -> Option<CityDetail<'_>> {
        let record = self.find(id)?;
        let summary = self.summary();

        Some(CityDetail {
            record,
            coordinates: registry::find_by_name(&record.city),
            metrics: chart::metric_bars(record),
            comparison: chart::comparison_bars(record, &summary),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityDetail<'a> {
    pub record: &'a WeatherRecord,
    /// Registry entry with the same name, if any.
    pub coordinates: Option<&'static Location>,
    pub metrics: [ChartBar; 5],
    pub comparison: [ChartBar; 2],
}
