//! Cache Module
//!
//! Provides in-memory caching with oldest-access eviction and idle expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;

// == Cache Key ==
/// Normalizes a city name into its cache key (trimmed, lower-cased).
pub fn cache_key(city: &str) -> String {
    city.trim().to_lowercase()
}
