use serde::Serialize;

/// A named place with fixed coordinates tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { name, latitude, longitude }
    }
}

/// Cities shown on the dashboard, in display order.
pub const CITIES: &[Location] = &[
    Location::new("New York", 40.7128, -74.0060),
    Location::new("Los Angeles", 34.0522, -118.2437),
    Location::new("Chicago", 41.8781, -87.6298),
    Location::new("Houston", 29.7604, -95.3698),
    Location::new("Phoenix", 33.4484, -112.0740),
    Location::new("Philadelphia", 39.9526, -75.1652),
    Location::new("San Antonio", 29.4241, -98.4936),
    Location::new("San Diego", 32.7157, -117.1611),
    Location::new("Dallas", 32.7767, -96.7970),
    Location::new("San Jose", 37.3382, -121.8863),
    Location::new("Austin", 30.2672, -97.7431),
    Location::new("Jacksonville", 30.3322, -81.6557),
    Location::new("Miami", 25.7617, -80.1918),
    Location::new("Seattle", 47.6062, -122.3321),
    Location::new("Denver", 39.7392, -104.9903),
    Location::new("Boston", 42.3601, -71.0589),
    Location::new("Nashville", 36.1627, -86.7816),
    Location::new("Portland", 45.5152, -122.6784),
    Location::new("Las Vegas", 36.1699, -115.1398),
    Location::new("Detroit", 42.3314, -83.0458),
    Location::new("London", 51.5074, -0.1278),
    Location::new("Tokyo", 35.6762, 139.6503),
    Location::new("Paris", 48.8566, 2.3522),
    Location::new("Sydney", -33.8688, 151.2093),
];

/// Exact, case-sensitive lookup by city name.
pub fn find_by_name(name: &str) -> Option<&'static Location> {
    CITIES.iter().find(|loc| loc.name == name)
}
