//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access-time tracking.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cache entry with its value and last access time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Last time the entry was inserted or read
    pub last_access: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            last_access: Utc::now(),
        }
    }

    // == Touch ==
    /// Refreshes the access time without altering the value.
    pub fn touch(&mut self) {
        self.last_access = Utc::now();
    }

    // == Idle For ==
    /// Returns how long the entry has gone unaccessed as of `now`.
    ///
    /// Access times in the future of `now` count as zero idle time.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        (now - self.last_access).to_std().unwrap_or(Duration::ZERO)
    }

    // == Is Idle ==
    /// Checks if the entry has been idle for at least `threshold`.
    ///
    /// Boundary condition: an entry idle for exactly `threshold` is expired.
    pub fn is_idle(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        self.idle_for(now) >= threshold
    }
}
