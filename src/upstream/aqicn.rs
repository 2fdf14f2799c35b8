//! AQICN (World Air Quality Index) client.
//!
//! Fetches the city feed and converts it to an `AirQualityRecord`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use super::derive::{dominant_pollutant, is_city_match, quality_level, weather_snapshot};
use super::AirQualityFetcher;
use crate::config::Config;
use crate::error::{AqiError, Result};
use crate::models::AirQualityRecord;

/// Raw `/feed/{city}/` response.
///
/// `data` is a message string when `status` is not `ok`, so it is decoded
/// lazily.
#[derive(Debug, Deserialize)]
pub(crate) struct AqicnResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct FeedData {
    #[serde(default)]
    aqi: Option<serde_json::Value>,
    city: FeedCity,
    #[serde(default)]
    iaqi: HashMap<String, FeedReading>,
}

#[derive(Debug, Deserialize)]
struct FeedCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FeedReading {
    #[serde(default)]
    v: Option<f64>,
}

/// HTTP client for the AQICN feed API.
#[derive(Debug, Clone)]
pub struct AqicnClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AqicnClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aqi_cache/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AqiError::Internal(format!("failed to build AQICN HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.aqicn_api_url,
            &config.aqicn_api_key,
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    fn feed_url(&self, city: &str) -> String {
        format!("{}/feed/{}/", self.base_url, city.trim().to_lowercase())
    }

    async fn fetch_record(&self, city: &str) -> Result<AirQualityRecord> {
        let url = self.feed_url(city);
        debug!("Making AQICN request for city: {} ({})", city, url);

        let resp = self
            .client
            .get(&url)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AqiError::UpstreamUnavailable(format!("HTTP error for {city}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AqiError::UpstreamDataInvalid(format!(
                "AQICN returned HTTP {} for {city}",
                status.as_u16()
            )));
        }

        let payload: AqicnResponse = resp.json().await.map_err(|e| {
            AqiError::UpstreamDataInvalid(format!("JSON parse error for {city}: {e}"))
        })?;

        into_record(city, payload, Utc::now())
    }
}

#[async_trait]
impl AirQualityFetcher for AqicnClient {
    async fn fetch(&self, city: &str) -> Result<AirQualityRecord> {
        self.fetch_record(city).await.map_err(|e| {
            error!("Error fetching air quality data for city {}: {}", city, e);
            e
        })
    }
}

/// Validates a feed payload against the requested city and converts it.
pub(crate) fn into_record(
    requested: &str,
    payload: AqicnResponse,
    now: DateTime<Utc>,
) -> Result<AirQualityRecord> {
    if payload.status != "ok" {
        let detail = payload
            .data
            .as_ref()
            .and_then(|d| d.as_str())
            .map(|msg| format!(" ({msg})"))
            .unwrap_or_default();
        return Err(AqiError::UpstreamDataInvalid(format!(
            "API error: {}{}",
            payload.status, detail
        )));
    }

    let data = payload
        .data
        .ok_or_else(|| AqiError::UpstreamDataInvalid("Empty response from AQICN API".to_string()))?;
    let feed: FeedData = serde_json::from_value(data)
        .map_err(|e| AqiError::UpstreamDataInvalid(format!("Malformed feed data: {e}")))?;

    if !is_city_match(requested, &feed.city.name) {
        warn!("City mismatch: requested '{}', got '{}'", requested, feed.city.name);
        return Err(AqiError::UpstreamDataInvalid(format!(
            "API returned data for different city: {}",
            feed.city.name
        )));
    }

    // The provider reports "-" when a station has no current AQI.
    let aqi = feed
        .aqi
        .as_ref()
        .and_then(|v| v.as_i64())
        .and_then(|v| i32::try_from(v).ok());

    let pollutants: HashMap<String, f64> = feed
        .iaqi
        .into_iter()
        .filter_map(|(key, reading)| reading.v.map(|v| (key, v)))
        .collect();

    let quality = quality_level(aqi);
    info!(
        "Converted data for {}: AQI={:?}, Quality={}",
        feed.city.name, aqi, quality
    );

    Ok(AirQualityRecord {
        city: feed.city.name,
        aqi,
        quality: quality.to_string(),
        dominant_pollutant: dominant_pollutant(&pollutants),
        weather: weather_snapshot(&pollutants),
        pollutants,
        timestamp: now,
    })
}
