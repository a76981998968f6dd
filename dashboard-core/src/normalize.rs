use crate::{
    condition::classify,
    model::{RawObservation, WeatherRecord},
    registry::Location,
    units::{mps_to_kmh, round_half_up},
};

/// Visibility assumed when the provider omits it, in meters.
pub const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

/// Build the canonical record for the location at position `index` of the
/// fetch list. Ids are 1-based so they stay stable for the whole cycle.
pub fn normalize(location: &Location, index: usize, raw: &RawObservation) -> WeatherRecord {
    let visibility_m = raw.visibility.unwrap_or(DEFAULT_VISIBILITY_M);

    WeatherRecord {
        id: index as u32 + 1,
        city: location.name.to_string(),
        temperature_c: round_half_up(raw.temperature_2m),
        condition: classify(raw.weather_code),
        humidity_pct: round_half_up(raw.relative_humidity_2m),
        wind_speed_kmh: mps_to_kmh(raw.wind_speed_10m),
        pressure_mb: round_half_up(raw.surface_pressure),
        visibility_km: round_half_up(visibility_m / 1000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionCategory;

    fn raw(visibility: Option<f64>) -> RawObservation {
        RawObservation {
            temperature_2m: 21.6,
            relative_humidity_2m: 64.0,
            weather_code: 61,
            surface_pressure: 1013.49,
            wind_speed_10m: 5.0,
            visibility,
        }
    }

    #[test]
    fn normalize_converts_and_rounds() {
        let loc = Location::new("London", 51.5074, -0.1278);
        let rec = normalize(&loc, 20, &raw(Some(24_140.0)));

        assert_eq!(rec.id, 21);
        assert_eq!(rec.city, "London");
        assert_eq!(rec.temperature_c, 22);
        assert_eq!(rec.condition, ConditionCategory::Rain);
        assert_eq!(rec.humidity_pct, 64);
        assert_eq!(rec.wind_speed_kmh, 18);
        assert_eq!(rec.pressure_mb, 1013);
        assert_eq!(rec.visibility_km, 24);
    }

    #[test]
    fn missing_visibility_defaults_to_ten_km() {
        let loc = Location::new("Paris", 48.8566, 2.3522);
        let rec = normalize(&loc, 0, &raw(None));
        assert_eq!(rec.id, 1);
        assert_eq!(rec.visibility_km, 10);
    }

    #[test]
    fn negative_half_temperatures_round_up() {
        let loc = Location::new("Denver", 39.7392, -104.9903);
        let mut obs = raw(None);
        obs.temperature_2m = -3.5;
        assert_eq!(normalize(&loc, 0, &obs).temperature_c, -3);
    }
}
