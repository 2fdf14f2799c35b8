//! API Module
//!
//! HTTP handlers and routing for the air-quality REST API.
//!
//! # Endpoints
//! - `POST /api/v1/air-quality/search` - Look up a city through the cache
//! - `GET /api/v1/air-quality/cache/stats` - Cache counters and size
//! - `DELETE /api/v1/air-quality/cache/:city` - Evict one city
//! - `DELETE /api/v1/air-quality/cache` - Evict everything
//! - `GET /api/v1/air-quality/cache/detailed-info` - Counters and access log
//! - `GET /api/v1/air-quality/cache/test/*` - Capacity and expiration hooks
//! - `/api/v1/favorites` - Favorites registry
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::ApiJson;
pub use handlers::*;
pub use routes::create_router;
