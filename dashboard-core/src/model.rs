use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    condition::{ConditionCategory, ConditionFilter},
    error::ParseBandError,
    units::celsius_to_fahrenheit,
};

/// Open-Meteo `current` block for one location.
#[derive(Debug, Clone, Deserialize)]
pub struct RawObservation {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: i64,
    pub surface_pressure: f64,
    /// m/s when requested with `wind_speed_unit=ms`.
    pub wind_speed_10m: f64,
    /// Meters. Not every model reports it.
    #[serde(default)]
    pub visibility: Option<f64>,
}

/// Full forecast response; only `current` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: RawObservation,
}

/// Normalized snapshot of one location's current conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    pub id: u32,
    pub city: String,
    pub temperature_c: i64,
    pub condition: ConditionCategory,
    pub humidity_pct: i64,
    pub wind_speed_kmh: i64,
    pub pressure_mb: i64,
    pub visibility_km: i64,
}

impl WeatherRecord {
    pub fn temperature_f(&self) -> i64 {
        celsius_to_fahrenheit(self.temperature_c as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureBand {
    #[default]
    All,
    /// Above 77°F.
    Hot,
    /// 59..=77°F.
    Warm,
    /// Below 59°F.
    Cold,
}

impl TemperatureBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }

    pub fn contains(&self, temperature_f: i64) -> bool {
        match self {
            Self::All => true,
            Self::Hot => temperature_f > 77,
            Self::Warm => (59..=77).contains(&temperature_f),
            Self::Cold => temperature_f < 59,
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureBand {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "hot" => Ok(Self::Hot),
            "warm" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            _ => Err(ParseBandError(s.to_string())),
        }
    }
}

/// Search text, temperature band and condition applied together.
/// The default passes every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub temperature_band: TemperatureBand,
    pub condition: ConditionFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HottestCity {
    pub city: String,
    pub temperature_c: i64,
    /// `None` for the empty-set placeholder.
    pub id: Option<u32>,
}

impl HottestCity {
    pub fn placeholder() -> Self {
        Self {
            city: "N/A".to_string(),
            temperature_c: 0,
            id: None,
        }
    }

    pub fn temperature_f(&self) -> i64 {
        celsius_to_fahrenheit(self.temperature_c as f64)
    }
}

impl From<&WeatherRecord> for HottestCity {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            city: record.city.clone(),
            temperature_c: record.temperature_c,
            id: Some(record.id),
        }
    }
}

/// Fleet-wide statistics over the full record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub total_cities: usize,
    pub average_temperature_f: i64,
    pub hottest_city: HottestCity,
    pub average_humidity_pct: i64,
}

/// One bar of the per-city temperature chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemperatureBar {
    pub city: String,
    pub temperature_f: i64,
}

/// Generic `{ name, value }` tuple used by pie and bar charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub name: String,
    pub value: i64,
}

impl ChartBar {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
