//! Plain-text rendering of dashboard views.

use chrono::Local;
use dashboard_core::{
    AggregateSummary, ChartBar, CityDetail, FilterCriteria, Location, Snapshot, TemperatureBar,
    WeatherRecord,
};

const BAR_WIDTH: usize = 30;

pub fn dashboard(snapshot: &Snapshot, criteria: &FilterCriteria) -> String {
    let fetched = snapshot.fetched_at().with_timezone(&Local);

    let mut out = format!(
        "Weather Data Dashboard\nUpdated {}\n\n",
        fetched.format("%Y-%m-%d %H:%M")
    );
    out.push_str(&summary_cards(&snapshot.summary()));

    out.push_str("\nTemperature by City (°F)\n");
    out.push_str(&temperature_chart(&snapshot.temperature_series()));

    out.push_str("\nWeather Condition Distribution\n");
    out.push_str(&bar_chart(&snapshot.condition_distribution()));

    let cards = snapshot.filtered(criteria);
    out.push('\n');
    if cards.is_empty() {
        out.push_str("No weather data found matching your criteria.\n");
    }
    for record in &cards {
        out.push_str(&city_card(record));
        out.push('\n');
    }

    out
}

/// Summary over every record, plus the records passing `criteria`.
pub fn json(snapshot: &Snapshot, criteria: &FilterCriteria) -> serde_json::Result<String> {
    let out = serde_json::json!({
        "fetched_at": snapshot.fetched_at(),
        "summary": snapshot.summary(),
        "records": snapshot.filtered(criteria),
    });
    serde_json::to_string_pretty(&out)
}

pub fn summary_cards(summary: &AggregateSummary) -> String {
    let hottest = &summary.hottest_city;
    format!(
        "Total Cities:        {}\n\
         Average Temperature: {}°F\n\
         Hottest City:        {} ({}°F)\n\
         Average Humidity:    {}%\n",
        summary.total_cities,
        summary.average_temperature_f,
        hottest.city,
        hottest.temperature_f(),
        summary.average_humidity_pct,
    )
}

pub fn city_card(record: &WeatherRecord) -> String {
    format!(
        "[{id}] {city} {icon}\n    {temp}°F  {condition}\n    \
         Humidity: {humidity}%  Wind: {wind} km/h  Pressure: {pressure} mb  Visibility: {visibility} km\n",
        id = record.id,
        city = record.city,
        icon = record.condition.icon(),
        temp = record.temperature_f(),
        condition = record.condition,
        humidity = record.humidity_pct,
        wind = record.wind_speed_kmh,
        pressure = record.pressure_mb,
        visibility = record.visibility_km,
    )
}

pub fn detail(detail: &CityDetail<'_>) -> String {
    let record = detail.record;

    let mut out = format!("Detail View for {}\n\n", record.city);
    out.push_str(&city_card(record));

    out.push_str("\nCity Weather Metrics\n");
    out.push_str(&bar_chart(&detail.metrics));

    out.push_str("\nTemperature vs. All Cities Average\n");
    out.push_str(&bar_chart(&detail.comparison));

    if let Some(loc) = detail.coordinates {
        out.push_str(&format!(
            "\nCity Location\nLat: {}, Lon: {}\n",
            loc.latitude, loc.longitude
        ));
    }

    out.push_str("\nBack to dashboard: weather-dashboard show\n");
    out
}

pub fn not_found() -> String {
    "City not found.\nBack to dashboard: weather-dashboard show\n".to_string()
}

pub fn cities(locations: &[Location]) -> String {
    locations
        .iter()
        .enumerate()
        .map(|(i, loc)| {
            format!("{:>2}  {:<14} {:>9.4} {:>10.4}\n", i + 1, loc.name, loc.latitude, loc.longitude)
        })
        .collect()
}

fn temperature_chart(series: &[TemperatureBar]) -> String {
    let rows: Vec<ChartBar> = series
        .iter()
        .map(|b| ChartBar::new(b.city.clone(), b.temperature_f))
        .collect();
    bar_chart(&rows)
}

/// Horizontal bars scaled to the largest value; non-positive values get no bar.
fn bar_chart(rows: &[ChartBar]) -> String {
    let label_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|r| r.value).max().unwrap_or(0).max(1);

    rows.iter()
        .map(|r| {
            let len = (r.value.max(0) as usize * BAR_WIDTH).div_ceil(max as usize);
            format!(
                "  {:<width$} {} {}\n",
                r.name,
                "█".repeat(len),
                r.value,
                width = label_width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{ConditionCategory, HottestCity};

    fn record(id: u32, city: &str, temperature_c: i64) -> WeatherRecord {
        WeatherRecord {
            id,
            city: city.to_string(),
            temperature_c,
            condition: ConditionCategory::Rain,
            humidity_pct: 81,
            wind_speed_kmh: 22,
            pressure_mb: 1004,
            visibility_km: 7,
        }
    }

    #[test]
    fn summary_cards_show_placeholder() {
        let summary = AggregateSummary {
            total_cities: 0,
            average_temperature_f: 0,
            hottest_city: HottestCity::placeholder(),
            average_humidity_pct: 0,
        };
        let text = summary_cards(&summary);
        assert!(text.contains("Total Cities:        0"));
        assert!(text.contains("Hottest City:        N/A (32°F)"));
    }

    #[test]
    fn city_card_lists_all_metrics() {
        let card = city_card(&record(3, "Seattle", 10));
        assert!(card.starts_with("[3] Seattle 🌧️"));
        assert!(card.contains("50°F  Rain"));
        assert!(card.contains("Humidity: 81%"));
        assert!(card.contains("Wind: 22 km/h"));
        assert!(card.contains("Pressure: 1004 mb"));
        assert!(card.contains("Visibility: 7 km"));
    }

    #[test]
    fn empty_filter_result_message() {
        let snapshot = Snapshot::new(vec![record(1, "Seattle", 10)]);
        let criteria = FilterCriteria {
            search_text: "zzz".into(),
            ..Default::default()
        };
        let text = dashboard(&snapshot, &criteria);
        assert!(text.contains("No weather data found matching your criteria."));
        assert!(text.contains("Total Cities:        1"));
    }

    #[test]
    fn json_output_applies_filters() {
        let snapshot = Snapshot::new(vec![record(1, "Seattle", 10), record(2, "Denver", 30)]);
        let criteria = FilterCriteria {
            temperature_band: "hot".parse().unwrap(),
            ..Default::default()
        };

        let value: serde_json::Value =
            serde_json::from_str(&json(&snapshot, &criteria).unwrap()).unwrap();

        let records = value["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["city"], "Denver");
        assert_eq!(value["summary"]["total_cities"], 2);
    }

    #[test]
    fn headings_start_their_views() {
        let snapshot = Snapshot::new(vec![record(1, "Seattle", 10)]);

        let text = dashboard(&snapshot, &FilterCriteria::default());
        assert!(text.starts_with("Weather Data Dashboard\nUpdated "));
        assert!(text.contains("\n\nTotal Cities:"));

        let view = snapshot.detail(1).unwrap();
        assert!(detail(&view).starts_with("Detail View for Seattle\n\n[1] Seattle"));
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let rows = [ChartBar::new("a", 10), ChartBar::new("bb", 5), ChartBar::new("c", -3)];
        let lines: Vec<String> = bar_chart(&rows).lines().map(str::to_string).collect();

        assert_eq!(lines[0], format!("  a  {} 10", "█".repeat(BAR_WIDTH)));
        assert_eq!(lines[1], format!("  bb {} 5", "█".repeat(BAR_WIDTH / 2)));
        assert_eq!(lines[2], "  c   -3");
    }

    #[test]
    fn detail_includes_coordinates_and_charts() {
        let snapshot = Snapshot::new(vec![record(1, "Seattle", 10), record(2, "Denver", 20)]);
        let view = snapshot.detail(1).unwrap();
        let text = detail(&view);

        assert!(text.contains("Detail View for Seattle"));
        assert!(text.contains("Visibility (km)"));
        assert!(text.contains("All Cities Avg"));
        assert!(text.contains("Lat: 47.6062, Lon: -122.3321"));
    }

    #[test]
    fn not_found_points_back() {
        assert!(not_found().starts_with("City not found."));
    }

    #[test]
    fn cities_are_numbered() {
        let text = cities(&dashboard_core::CITIES[..2]);
        assert!(text.starts_with(" 1  New York"));
        assert_eq!(text.lines().count(), 2);
    }
}
