//! Chart-ready projections of the record set.

use crate::{
    condition::ConditionCategory,
    model::{AggregateSummary, ChartBar, TemperatureBar, WeatherRecord},
};

pub const AVERAGE_BAR_LABEL: &str = "All Cities Avg";

/// One bar per record, in input order.
pub fn temperature_series(records: &[WeatherRecord]) -> Vec<TemperatureBar> {
    records
        .iter()
        .map(|r| TemperatureBar {
            city: r.city.clone(),
            temperature_f: r.temperature_f(),
        })
        .collect()
}

/// Record count per condition, ordered by first occurrence.
pub fn condition_distribution(records: &[WeatherRecord]) -> Vec<ChartBar> {
    let mut counts: Vec<(ConditionCategory, i64)> = Vec::new();

    for record in records {
        match counts.iter_mut().find(|(c, _)| *c == record.condition) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.condition, 1)),
        }
    }

    counts
        .into_iter()
        .map(|(condition, n)| ChartBar::new(condition.as_str(), n))
        .collect()
}

/// The five detail-view metrics of one city.
pub fn metric_bars(record: &WeatherRecord) -> [ChartBar; 5] {
    [
        ChartBar::new("Temp (°F)", record.temperature_f()),
        ChartBar::new("Humidity (%)", record.humidity_pct),
        ChartBar::new("Wind (km/h)", record.wind_speed_kmh),
        ChartBar::new("Pressure (mb)", record.pressure_mb),
        ChartBar::new("Visibility (km)", record.visibility_km),
    ]
}

/// City temperature next to the fleet average from `summary`.
pub fn comparison_bars(record: &WeatherRecord, summary: &AggregateSummary) -> [ChartBar; 2] {
    [
        ChartBar::new(record.city.clone(), record.temperature_f()),
        ChartBar::new(AVERAGE_BAR_LABEL, summary.average_temperature_f),
    ]
}
