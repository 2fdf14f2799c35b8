//! Cache Store Module
//!
//! Concurrent key/value storage with oldest-access eviction and idle expiration.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};

// == Cache Store ==
/// Internally synchronized cache storage.
///
/// Each entry carries its own access time, so the value map and the access
/// log cannot drift apart. Capacity is not enforced here: callers decide
/// when to call [`CacheStore::evict_oldest`].
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: DashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns a copy of the entry, if present. Does not touch it.
    pub fn get(&self, key: &str) -> Option<CacheEntry<V>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    // == Put ==
    /// Inserts or overwrites an entry, stamping it with the current time.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), CacheEntry::new(value));
    }

    // == Touch ==
    /// Refreshes the access time of an existing entry.
    ///
    /// Returns false if the key is absent.
    pub fn touch(&self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(mut entry) => {
                entry.touch();
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes an entry. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Evict Oldest ==
    /// Removes the entry with the earliest access time and counts an eviction.
    ///
    /// Equal access times are broken by the lexicographically smallest key.
    /// Returns the evicted key, or None if nothing was removed.
    pub fn evict_oldest(&self) -> Option<String> {
        let (_, oldest) = self
            .entries
            .iter()
            .map(|entry| (entry.value().last_access, entry.key().clone()))
            .min()?;

        // A concurrent evictor may have taken it first.
        self.entries.remove(&oldest)?;
        self.stats.record_eviction();
        info!("Max size reached, evicted oldest entry: {}", oldest);
        Some(oldest)
    }

    // == Sweep Expired ==
    /// Removes every entry idle for at least `idle_threshold`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self, idle_threshold: Duration) -> usize {
        let now = Utc::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.value().is_idle(now, idle_threshold))
            .map(|entry| entry.key().clone())
            .collect();

        let mut removed = 0;
        for key in expired {
            // Skip entries touched since the scan.
            if self
                .entries
                .remove_if(&key, |_, entry| entry.is_idle(now, idle_threshold))
                .is_some()
            {
                info!("Idle expiry removed: {}", key);
                removed += 1;
            }
        }
        removed
    }

    // == Set Last Access ==
    /// Overwrites the access time of an existing entry.
    ///
    /// Returns false if the key is absent.
    pub fn set_last_access(&self, key: &str, at: DateTime<Utc>) -> bool {
        match self.entries.get_mut(key) {
            Some(mut entry) => {
                entry.last_access = at;
                true
            }
            None => false,
        }
    }

    // == Access Times ==
    /// Returns every key with its last access time, ordered by key.
    pub fn access_times(&self) -> BTreeMap<String, DateTime<Utc>> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().last_access))
            .collect()
    }

    // == Clear ==
    /// Removes all entries. Counters are left untouched.
    pub fn clear(&self) {
        self.entries.clear();
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Counters shared with the lookup path.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Current counters with the current size.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot(self.len())
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
