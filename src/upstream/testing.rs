//! In-process fetcher used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::AirQualityFetcher;
use crate::cache::cache_key;
use crate::error::{AqiError, Result};
use crate::models::AirQualityRecord;

/// Returns a synthetic record per city and fails for listed cities.
#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    calls: AtomicUsize,
    failing: Mutex<HashSet<String>>,
    delay: Option<Duration>,
}

impl StubFetcher {
    pub(crate) fn failing_for(cities: &[&str]) -> Self {
        Self {
            failing: Mutex::new(cities.iter().map(|c| cache_key(c)).collect()),
            ..Default::default()
        }
    }

    pub(crate) fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn heal(&self, city: &str) {
        self.failing.lock().unwrap().remove(&cache_key(city));
    }
}

#[async_trait]
impl AirQualityFetcher for StubFetcher {
    async fn fetch(&self, city: &str) -> Result<AirQualityRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(&cache_key(city)) {
            return Err(AqiError::UpstreamDataInvalid(format!(
                "API returned data for different city: {city}"
            )));
        }

        let reading = city.trim().len() as f64 * 10.0;
        Ok(AirQualityRecord {
            city: city.trim().to_string(),
            aqi: Some(reading as i32),
            quality: "Moderate".to_string(),
            dominant_pollutant: "pm25".to_string(),
            pollutants: HashMap::from([("pm25".to_string(), reading)]),
            timestamp: Utc::now(),
            weather: None,
        })
    }
}
