//! AQI Cache - Air-quality lookup service
//!
//! Serves AQICN readings through a capacity-bounded cache with
//! oldest-access eviction and on-demand idle expiration.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod service;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{AqiError, Result};
pub use service::CachedAirQualityService;
pub use upstream::AirQualityFetcher;
