//! API Handlers
//!
//! HTTP request handlers for the air-quality and cache endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use super::extract::ApiJson;
use crate::cache::StatsSnapshot;
use crate::config::Config;
use crate::error::{AqiError, Result};
use crate::favorites::{FavoriteCity, FavoritesRegistry};
use crate::models::{
    AirQualityRecord, ApiResponse, CheckExpiredReport, CityRequest, DetailedCacheInfo,
    ExpirationReport, ForceExpireReport, HealthResponse, MaxSizeReport, SearchRequest,
};
use crate::service::CachedAirQualityService;
use crate::upstream::AqicnClient;

/// Cities driven through the cache by the max-size test endpoint.
pub const MAX_SIZE_TEST_CITIES: [&str; 5] = ["london", "paris", "berlin", "tokyo", "delhi"];

/// Cities primed by the expiration test endpoint.
pub const EXPIRATION_TEST_CITIES: [&str; 2] = ["london", "paris"];

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached lookup service
    pub service: Arc<CachedAirQualityService>,
    /// Favorites registry
    pub favorites: Arc<FavoritesRegistry>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: CachedAirQualityService) -> Self {
        Self {
            service: Arc::new(service),
            favorites: Arc::new(FavoritesRegistry::new()),
        }
    }

    /// Creates a new AppState from configuration, backed by the AQICN client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = Arc::new(AqicnClient::from_config(config)?);
        Ok(Self::new(CachedAirQualityService::from_config(config, fetcher)))
    }
}

/// Handler for POST /api/v1/air-quality/search
pub async fn search_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<ApiResponse<AirQualityRecord>>> {
    if let Some(error_msg) = req.validate() {
        return Err(AqiError::Validation(error_msg));
    }

    info!("Searching air quality for city: {}", req.city);
    let record = state.service.get_air_quality(&req.city).await?;

    Ok(Json(ApiResponse::success(record)))
}

/// Handler for GET /api/v1/air-quality/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<ApiResponse<StatsSnapshot>> {
    Json(ApiResponse::success(state.service.stats()))
}

/// Handler for DELETE /api/v1/air-quality/cache/:city
///
/// Reports success whether or not the city was cached.
pub async fn evict_city_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Json<ApiResponse<()>> {
    state.service.evict_city(&city);
    Json(ApiResponse::message(format!("Cache evicted for city: {}", city)))
}

/// Handler for DELETE /api/v1/air-quality/cache
pub async fn evict_all_handler(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.service.evict_all();
    Json(ApiResponse::message("All cache entries evicted"))
}

/// Handler for GET /api/v1/air-quality/cache/detailed-info
pub async fn detailed_info_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedCacheInfo>> {
    Json(ApiResponse::success(state.service.detailed_info()))
}

/// Handler for GET /api/v1/air-quality/cache/test/max-size
///
/// Looks up more cities than the cache can hold. Individual failures are
/// reported per city rather than failing the request.
pub async fn test_max_size_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<MaxSizeReport>> {
    let mut test_cities = Vec::with_capacity(MAX_SIZE_TEST_CITIES.len());
    for city in MAX_SIZE_TEST_CITIES {
        match state.service.get_air_quality(city).await {
            Ok(_) => test_cities.push(format!("Fetched: {}", city)),
            Err(e) => test_cities.push(format!("Error: {} - {}", city, e)),
        }
    }

    Json(ApiResponse::success(MaxSizeReport {
        test_cities,
        current_stats: state.service.stats(),
        message: format!(
            "Added {} cities to test maximum cache size (max: {})",
            MAX_SIZE_TEST_CITIES.len(),
            state.service.max_entries()
        ),
    }))
}

/// Handler for GET /api/v1/air-quality/cache/test/expiration
pub async fn test_expiration_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ExpirationReport>>> {
    for city in EXPIRATION_TEST_CITIES {
        state.service.get_air_quality(city).await?;
    }

    Ok(Json(ApiResponse::success(ExpirationReport {
        before_expiration: state.service.detailed_info(),
        message: format!(
            "Data cached. Wait {}+ seconds, then call /cache/test/check-expired",
            state.service.idle_threshold().as_secs()
        ),
    })))
}

/// Handler for POST /api/v1/air-quality/cache/test/force-expire
pub async fn force_expire_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CityRequest>,
) -> Result<Json<ApiResponse<ForceExpireReport>>> {
    if let Some(error_msg) = req.validate() {
        return Err(AqiError::Validation(error_msg));
    }

    let marked = state.service.force_expire(&req.city)?;

    Ok(Json(ApiResponse::success(ForceExpireReport {
        message: format!("Forced expiration for city: {}", req.city),
        marked,
        current_stats: state.service.stats(),
    })))
}

/// Handler for GET /api/v1/air-quality/cache/test/check-expired
pub async fn check_expired_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<CheckExpiredReport>> {
    let expired = state.service.check_and_expire();

    Json(ApiResponse::success(CheckExpiredReport {
        after_expiration_check: state.service.detailed_info(),
        expired,
        message: "Manual expiration check completed".to_string(),
    }))
}

/// Handler for GET /api/v1/favorites
pub async fn list_favorites_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<FavoriteCity>>> {
    Json(ApiResponse::success(state.favorites.list()))
}

/// Handler for POST /api/v1/favorites
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CityRequest>,
) -> Result<Json<ApiResponse<FavoriteCity>>> {
    if let Some(error_msg) = req.validate() {
        return Err(AqiError::Validation(error_msg));
    }

    Ok(Json(ApiResponse::success(state.favorites.add(&req.city))))
}

/// Handler for DELETE /api/v1/favorites/:city
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Json<ApiResponse<()>> {
    state.favorites.remove(&city);
    Json(ApiResponse::message(format!("Removed favorite city: {}", city)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
