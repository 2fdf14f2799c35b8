//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_favorite_handler, check_expired_handler, detailed_info_handler, evict_all_handler,
    evict_city_handler, force_expire_handler, health_handler, list_favorites_handler,
    remove_favorite_handler, search_handler, stats_handler, test_expiration_handler,
    test_max_size_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let air_quality = Router::new()
        .route("/search", post(search_handler))
        .route("/cache", delete(evict_all_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/detailed-info", get(detailed_info_handler))
        .route("/cache/test/max-size", get(test_max_size_handler))
        .route("/cache/test/expiration", get(test_expiration_handler))
        .route("/cache/test/force-expire", post(force_expire_handler))
        .route("/cache/test/check-expired", get(check_expired_handler))
        .route("/cache/:city", delete(evict_city_handler));

    let favorites = Router::new()
        .route("/", get(list_favorites_handler).post(add_favorite_handler))
        .route("/:city", delete(remove_favorite_handler));

    Router::new()
        .nest("/api/v1/air-quality", air_quality)
        .nest("/api/v1/favorites", favorites)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::service::CachedAirQualityService;
    use crate::upstream::testing::StubFetcher;

    fn create_test_app() -> Router {
        let service = CachedAirQualityService::new(
            Arc::new(StubFetcher::default()),
            3,
            Duration::from_secs(60),
        );
        create_router(AppState::new(service))
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let status = status_of(create_test_app(), "GET", "/api/v1/air-quality/cache/stats").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_evict_city_endpoint() {
        let status = status_of(create_test_app(), "DELETE", "/api/v1/air-quality/cache/paris").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_route_not_shadowed_by_city() {
        // GET on detailed-info must not fall into the DELETE-only :city route
        let status =
            status_of(create_test_app(), "GET", "/api/v1/air-quality/cache/detailed-info").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/air-quality/search")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"city":"London"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let status = status_of(create_test_app(), "GET", "/api/v1/nothing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
