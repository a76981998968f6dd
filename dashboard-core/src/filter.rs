use crate::model::{FilterCriteria, WeatherRecord};

/// Records passing every predicate in `criteria`, in input order.
pub fn filter(records: &[WeatherRecord], criteria: &FilterCriteria) -> Vec<WeatherRecord> {
    let needle = criteria.search_text.to_lowercase();

    records
        .iter()
        .filter(|r| r.city.to_lowercase().contains(&needle))
        .filter(|r| criteria.temperature_band.contains(r.temperature_f()))
        .filter(|r| criteria.condition.matches(r.condition))
        .cloned()
        .collect()
}
