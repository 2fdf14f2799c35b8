//! Request DTOs for the air-quality API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Minimum accepted city length, counted on the raw input
pub const MIN_CITY_LENGTH: usize = 2;

/// Maximum accepted city length, counted on the raw input
pub const MAX_CITY_LENGTH: usize = 50;

/// Request body for POST /api/v1/air-quality/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// City to look up
    #[serde(default)]
    pub city: String,
}

impl SearchRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.city.trim().is_empty() {
            return Some("city: City name is required".to_string());
        }
        let len = self.city.chars().count();
        if !(MIN_CITY_LENGTH..=MAX_CITY_LENGTH).contains(&len) {
            return Some(format!(
                "city: City name must be between {} and {} characters",
                MIN_CITY_LENGTH, MAX_CITY_LENGTH
            ));
        }
        None
    }
}

/// Request body carrying just a city, used by the force-expire and
/// favorites endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRequest {
    #[serde(default)]
    pub city: String,
}

impl CityRequest {
    pub fn validate(&self) -> Option<String> {
        if self.city.trim().is_empty() {
            return Some("city: City name is required".to_string());
        }
        None
    }
}
