//! Cached Lookup Service
//!
//! Read-through cache in front of an [`AirQualityFetcher`], plus the
//! administrative hooks used by the cache test endpoints.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use crate::cache::{cache_key, CacheStore, StatsSnapshot};
use crate::config::Config;
use crate::error::{AqiError, Result};
use crate::models::{AirQualityRecord, DetailedCacheInfo};
use crate::upstream::AirQualityFetcher;

/// Extra age added on top of the idle threshold by [`CachedAirQualityService::force_expire`].
pub const FORCE_EXPIRE_MARGIN: Duration = Duration::from_secs(60);

// == Cached Air Quality Service ==
/// Capacity-bounded, idle-expiring cache of air-quality records.
///
/// The miss path (check size, evict, fetch, insert) is not atomic. Two
/// concurrent misses for the same city both fetch and the last insert wins.
pub struct CachedAirQualityService {
    store: CacheStore<AirQualityRecord>,
    fetcher: Arc<dyn AirQualityFetcher>,
    max_entries: usize,
    idle_threshold: Duration,
}

impl CachedAirQualityService {
    // == Constructor ==
    /// Creates a service holding at most `max_entries` cities (minimum 1).
    pub fn new(
        fetcher: Arc<dyn AirQualityFetcher>,
        max_entries: usize,
        idle_threshold: Duration,
    ) -> Self {
        Self {
            store: CacheStore::new(),
            fetcher,
            max_entries: max_entries.max(1),
            idle_threshold,
        }
    }

    pub fn from_config(config: &Config, fetcher: Arc<dyn AirQualityFetcher>) -> Self {
        Self::new(fetcher, config.max_entries, config.idle_threshold())
    }

    // == Lookup ==
    /// Returns the cached record for `city`, fetching it on a miss.
    ///
    /// Fetch failures are returned unchanged and never create an entry. A
    /// capacity eviction made before the fetch is not undone.
    pub async fn get_air_quality(&self, city: &str) -> Result<AirQualityRecord> {
        let key = cache_key(city);
        let stats = self.store.stats();

        if let Some(entry) = self.store.get(&key) {
            stats.record_hit();
            self.store.touch(&key);
            info!("Cache HIT for city: {} - total hits: {}", city, stats.hits());
            return Ok(entry.value);
        }

        stats.record_miss();
        info!("Cache MISS for city: {} - total misses: {}", city, stats.misses());

        if self.store.len() >= self.max_entries {
            self.store.evict_oldest();
        }

        let record = self.fetcher.fetch(city).await?;
        self.store.put(key, record.clone());

        // Only reachable when concurrent misses raced past the check above.
        while self.store.len() > self.max_entries {
            self.store.evict_oldest();
        }

        Ok(record)
    }

    // == Evict City ==
    /// Drops one city from the cache. Absent cities are ignored.
    pub fn evict_city(&self, city: &str) {
        info!("Evicting cache for city: {}", city);
        self.store.remove(&cache_key(city));
    }

    // == Evict All ==
    /// Empties the cache; counters are kept.
    pub fn evict_all(&self) {
        info!("Evicting all cache entries");
        self.store.clear();
    }

    // == Check And Expire ==
    /// Removes every entry idle for at least the configured threshold.
    ///
    /// Expiration only ever happens through this call.
    pub fn check_and_expire(&self) -> usize {
        let expired = self.store.sweep_expired(self.idle_threshold);
        if expired > 0 {
            info!("Expired {} cache entries due to idle limit", expired);
        }
        expired
    }

    // == Force Expire ==
    /// Backdates a cached city so the next [`check_and_expire`] removes it.
    ///
    /// Returns `Ok(false)` when the city is not cached.
    ///
    /// [`check_and_expire`]: CachedAirQualityService::check_and_expire
    pub fn force_expire(&self, city: &str) -> Result<bool> {
        let age = self
            .idle_threshold
            .checked_add(FORCE_EXPIRE_MARGIN)
            .ok_or_else(|| AqiError::Internal("idle threshold out of range".to_string()))?;
        let age = chrono::Duration::from_std(age)
            .map_err(|e| AqiError::Internal(format!("idle threshold out of range: {e}")))?;
        let backdated = Utc::now()
            .checked_sub_signed(age)
            .ok_or_else(|| AqiError::Internal("idle threshold out of range".to_string()))?;

        let marked = self.store.set_last_access(&cache_key(city), backdated);
        if marked {
            info!("Forced expiration for city: {}", city);
        }
        Ok(marked)
    }

    // == Stats ==
    pub fn stats(&self) -> StatsSnapshot {
        let snapshot = self.store.snapshot();
        info!(
            "Cache stats - hits: {}, misses: {}, evictions: {}, hit ratio: {:.2}, size: {}",
            snapshot.hits, snapshot.misses, snapshot.evictions, snapshot.hit_ratio, snapshot.size
        );
        snapshot
    }

    // == Detailed Info ==
    /// Counters plus every cached city with its last access time.
    pub fn detailed_info(&self) -> DetailedCacheInfo {
        let cache_entries = self.store.access_times();
        let stats = self.store.stats();
        DetailedCacheInfo {
            hits: stats.hits(),
            misses: stats.misses(),
            evictions: stats.evictions(),
            size: cache_entries.len(),
            cache_entries,
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn idle_threshold(&self) -> Duration {
        self.idle_threshold
    }
}
