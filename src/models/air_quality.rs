//! Air-quality domain model
//!
//! The record returned by the upstream fetcher and held by the cache.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current air-quality reading for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityRecord {
    /// City (station) name as reported by the provider
    pub city: String,
    /// Air Quality Index, if the provider reported one
    pub aqi: Option<i32>,
    /// Quality label derived from the AQI band
    pub quality: String,
    /// Pollutant with the highest individual reading
    pub dominant_pollutant: String,
    /// Individual readings keyed by provider code (`pm25`, `o3`, `t`, ...)
    pub pollutants: HashMap<String, f64>,
    /// When the record was produced
    pub timestamp: DateTime<Utc>,
    /// Weather fields, present only when the provider sent any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
}

/// Weather readings shipped alongside the pollutant data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    /// One of 16 compass points, or `NA`
    pub wind_direction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = AirQualityRecord {
            city: "Paris".to_string(),
            aqi: Some(42),
            quality: "Good".to_string(),
            dominant_pollutant: "pm25".to_string(),
            pollutants: HashMap::from([("pm25".to_string(), 42.0)]),
            timestamp: Utc::now(),
            weather: Some(WeatherSnapshot {
                wind_speed: Some(3.5),
                wind_direction: "N".to_string(),
                ..Default::default()
            }),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dominantPollutant"], "pm25");
        assert_eq!(json["weather"]["windSpeed"], 3.5);
        assert_eq!(json["weather"]["windDirection"], "N");
    }

    #[test]
    fn test_record_without_weather_omits_field() {
        let record = AirQualityRecord {
            city: "Oslo".to_string(),
            aqi: None,
            quality: "Unknown".to_string(),
            dominant_pollutant: "Unknown".to_string(),
            pollutants: HashMap::new(),
            timestamp: Utc::now(),
            weather: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("weather").is_none());
        assert!(json["aqi"].is_null());
    }
}
