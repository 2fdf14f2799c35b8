//! Upstream Module
//!
//! The fetcher seam between the cache and the air-quality provider.

mod aqicn;
mod derive;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::AirQualityRecord;

pub use aqicn::AqicnClient;
pub use derive::{compass_direction, dominant_pollutant, is_city_match, quality_level, weather_snapshot};

// == Fetcher Trait ==
/// Produces the current air-quality record for a city.
///
/// Implementations are stateless from the cache's point of view; every call
/// is a fresh provider lookup.
#[async_trait]
pub trait AirQualityFetcher: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<AirQualityRecord>;
}
