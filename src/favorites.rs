//! Favorites Registry
//!
//! Per-instance registry of cities the user has starred. Owned by
//! `AppState`; there is no process-wide copy.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tracing::info;

use crate::cache::cache_key;

/// A starred city.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCity {
    pub city_name: String,
    pub added_at: DateTime<Utc>,
    pub last_known_aqi: Option<i32>,
    pub last_known_quality: Option<String>,
}

/// Concurrent favorites store keyed by normalized city name.
#[derive(Debug, Default)]
pub struct FavoritesRegistry {
    favorites: DashMap<String, FavoriteCity>,
}

impl FavoritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a favorite and returns it.
    pub fn add(&self, city: &str) -> FavoriteCity {
        let favorite = FavoriteCity {
            city_name: city.trim().to_string(),
            added_at: Utc::now(),
            last_known_aqi: None,
            last_known_quality: None,
        };
        self.favorites.insert(cache_key(city), favorite.clone());
        info!("Added favorite city: {}", city);
        favorite
    }

    /// Removes a favorite. Unknown cities are ignored.
    pub fn remove(&self, city: &str) -> bool {
        let removed = self.favorites.remove(&cache_key(city)).is_some();
        info!("Removed favorite city: {}", city);
        removed
    }

    /// All favorites ordered by normalized name.
    pub fn list(&self) -> Vec<FavoriteCity> {
        let mut entries: Vec<(String, FavoriteCity)> = self
            .favorites
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, favorite)| favorite).collect()
    }

    pub fn is_favorite(&self, city: &str) -> bool {
        self.favorites.contains_key(&cache_key(city))
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
