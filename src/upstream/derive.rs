//! Derived fields computed from a provider payload.

use std::collections::HashMap;

use crate::models::WeatherSnapshot;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Maps an AQI value onto its quality band.
pub fn quality_level(aqi: Option<i32>) -> &'static str {
    match aqi {
        None => "Unknown",
        Some(v) if v <= 50 => "Good",
        Some(v) if v <= 100 => "Moderate",
        Some(v) if v <= 150 => "Unhealthy for Sensitive Groups",
        Some(v) if v <= 200 => "Unhealthy",
        Some(v) if v <= 300 => "Very Unhealthy",
        Some(_) => "Hazardous",
    }
}

/// Returns the key with the highest reading, or `Unknown` when empty.
///
/// Equal readings resolve to the alphabetically first key.
pub fn dominant_pollutant(pollutants: &HashMap<String, f64>) -> String {
    pollutants
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(key, _)| key.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Converts a bearing in degrees to one of 16 compass points.
pub fn compass_direction(degrees: f64) -> &'static str {
    let index = ((degrees + 11.25) / 22.5).floor() as i64;
    COMPASS_POINTS[index.rem_euclid(16) as usize]
}

/// Builds the weather snapshot from the `t`, `h`, `p`, `w` and `wd` readings.
///
/// Returns None when none of temperature, humidity, pressure or wind speed
/// is present.
pub fn weather_snapshot(pollutants: &HashMap<String, f64>) -> Option<WeatherSnapshot> {
    let snapshot = WeatherSnapshot {
        temperature: pollutants.get("t").copied(),
        humidity: pollutants.get("h").copied(),
        pressure: pollutants.get("p").copied(),
        wind_speed: pollutants.get("w").copied(),
        wind_direction: pollutants
            .get("wd")
            .map(|deg| compass_direction(*deg))
            .unwrap_or("NA")
            .to_string(),
    };

    let has_reading = snapshot.temperature.is_some()
        || snapshot.humidity.is_some()
        || snapshot.pressure.is_some()
        || snapshot.wind_speed.is_some();

    has_reading.then_some(snapshot)
}

/// Loose city comparison: either name contains the other, ignoring case.
pub fn is_city_match(requested: &str, returned: &str) -> bool {
    let requested = requested.trim().to_lowercase();
    let returned = returned.trim().to_lowercase();
    returned.contains(&requested) || requested.contains(&returned)
}
