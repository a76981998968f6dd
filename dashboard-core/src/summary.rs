use crate::{
    model::{AggregateSummary, HottestCity, WeatherRecord},
    units::{celsius_to_fahrenheit, round_half_up},
};

/// Compute dashboard statistics over the full record set.
///
/// The Celsius mean is converted to Fahrenheit once, after averaging. The
/// hottest city is the first record holding the maximum Celsius value. An
/// empty set yields zeros and an `N/A` hottest city.
pub fn summarize(records: &[WeatherRecord]) -> AggregateSummary {
    if records.is_empty() {
        return AggregateSummary {
            total_cities: 0,
            average_temperature_f: 0,
            hottest_city: HottestCity::placeholder(),
            average_humidity_pct: 0,
        };
    }

    let count = records.len() as f64;
    let temperature_sum: i64 = records.iter().map(|r| r.temperature_c).sum();
    let humidity_sum: i64 = records.iter().map(|r| r.humidity_pct).sum();

    let hottest = records
        .iter()
        .skip(1)
        .fold(&records[0], |max, r| if r.temperature_c > max.temperature_c { r } else { max });

    AggregateSummary {
        total_cities: records.len(),
        average_temperature_f: celsius_to_fahrenheit(temperature_sum as f64 / count),
        hottest_city: HottestCity::from(hottest),
        average_humidity_pct: round_half_up(humidity_sum as f64 / count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionCategory;

    fn record(id: u32, city: &str, temperature_c: i64, humidity_pct: i64) -> WeatherRecord {
        WeatherRecord {
            id,
            city: city.to_string(),
            temperature_c,
            condition: ConditionCategory::Clear,
            humidity_pct,
            wind_speed_kmh: 10,
            pressure_mb: 1013,
            visibility_km: 10,
        }
    }

    #[test]
    fn empty_input_yields_placeholder() {
        let s = summarize(&[]);
        assert_eq!(s.total_cities, 0);
        assert_eq!(s.average_temperature_f, 0);
        assert_eq!(s.average_humidity_pct, 0);
        assert_eq!(s.hottest_city.city, "N/A");
        assert_eq!(s.hottest_city.temperature_c, 0);
    }

    #[test]
    fn averages_and_hottest() {
        let records = [record(1, "Oslo", 20, 50), record(2, "Cairo", 30, 70)];
        let s = summarize(&records);

        assert_eq!(s.total_cities, 2);
        assert_eq!(s.average_temperature_f, 77);
        assert_eq!(s.hottest_city.city, "Cairo");
        assert_eq!(s.hottest_city.id, Some(2));
        assert_eq!(s.hottest_city.temperature_f(), 86);
        assert_eq!(s.average_humidity_pct, 60);
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let records = [
            record(1, "Miami", 31, 80),
            record(2, "Phoenix", 31, 10),
            record(3, "Boston", 12, 60),
        ];
        assert_eq!(summarize(&records).hottest_city.city, "Miami");
    }

    #[test]
    fn averages_before_converting() {
        // mean 1.33C -> 34.4F -> 34; converting each first would give 34.67 -> 35
        let records = [record(1, "A", 1, 40), record(2, "B", 1, 41), record(3, "C", 2, 41)];
        let s = summarize(&records);
        assert_eq!(s.average_temperature_f, 34);
        assert_eq!(s.average_humidity_pct, 41);
    }

    #[test]
    fn half_degree_mean_is_not_rounded_before_converting() {
        // mean 0.5C -> 32.9F -> 33; rounding the mean to 1C first would give 34
        let records = [record(1, "A", 0, 50), record(2, "B", 1, 50)];
        assert_eq!(summarize(&records).average_temperature_f, 33);
    }

    #[test]
    fn negative_mean_humidity_rounding() {
        let records = [record(1, "A", -3, 33), record(2, "B", -2, 34)];
        let s = summarize(&records);
        // mean -2.5C -> 27.5F -> 28
        assert_eq!(s.average_temperature_f, 28);
        // 33.5 -> 34
        assert_eq!(s.average_humidity_pct, 34);
    }
}
