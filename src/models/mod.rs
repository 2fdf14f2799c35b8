//! Domain model and request/response DTOs
//!
//! `air_quality` holds the record the cache stores; `requests` and
//! `responses` define the HTTP bodies.

pub mod air_quality;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use air_quality::{AirQualityRecord, WeatherSnapshot};
pub use requests::{CityRequest, SearchRequest};
pub use responses::{
    ApiResponse, CheckExpiredReport, DetailedCacheInfo, ExpirationReport, ForceExpireReport,
    HealthResponse, MaxSizeReport,
};
