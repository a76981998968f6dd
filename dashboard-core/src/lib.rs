//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - The city registry and the Open-Meteo observation source
//! - Normalization of provider payloads into weather records
//! - Summary statistics, filtering and chart projections over a record set
//! - Configuration handling
//!
//! It is used by `dashboard-cli`, but the pipeline functions are pure and can
//! back any other presentation layer.

pub mod chart;
pub mod condition;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod registry;
pub mod summary;
pub mod units;

pub use condition::{ConditionCategory, ConditionFilter, ConditionLabel, classify};
pub use config::Config;
pub use dashboard::{CityDetail, Dashboard, Snapshot};
pub use error::{FetchError, ParseBandError};
pub use filter::filter;
pub use loader::load_records;
pub use model::{
    AggregateSummary, ChartBar, FilterCriteria, HottestCity, RawObservation, TemperatureBand,
    TemperatureBar, WeatherRecord,
};
pub use normalize::normalize;
pub use provider::{ObservationSource, OpenMeteoSource, source_from_config};
pub use registry::{CITIES, Location};
pub use summary::summarize;
