//! Response DTOs for the air-quality API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::StatsSnapshot;

/// Envelope wrapping every API response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Failure response carrying only a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Counters, size, and the full access log of the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCacheInfo {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    /// Normalized city → last access time
    pub cache_entries: BTreeMap<String, DateTime<Utc>>,
}

/// Response data for GET /cache/test/max-size
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxSizeReport {
    /// One line per city: "Fetched: x" or "Error: x - reason"
    pub test_cities: Vec<String>,
    pub current_stats: StatsSnapshot,
    pub message: String,
}

/// Response data for GET /cache/test/expiration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationReport {
    pub before_expiration: DetailedCacheInfo,
    pub message: String,
}

/// Response data for POST /cache/test/force-expire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceExpireReport {
    pub message: String,
    /// Whether the city was cached when the hook ran
    pub marked: bool,
    pub current_stats: StatsSnapshot,
}

/// Response data for GET /cache/test/check-expired
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckExpiredReport {
    pub after_expiration_check: DetailedCacheInfo,
    pub expired: usize,
    pub message: String,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_envelope() {
        let json = serde_json::to_value(ApiResponse::message("Cache evicted for city: oslo")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Cache evicted for city: oslo");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_value(ApiResponse::<()>::error("Something went wrong")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Something went wrong");
    }

    #[test]
    fn test_detailed_info_serialize() {
        let info = DetailedCacheInfo {
            hits: 1,
            misses: 2,
            evictions: 0,
            size: 1,
            cache_entries: BTreeMap::from([("paris".to_string(), Utc::now())]),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["cacheEntries"]["paris"].is_string());
        assert_eq!(json["misses"], 2);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
