use crate::Article;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Configuration for the news cache
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// How long a fetched article list stays servable
    pub news_ttl: Duration,
    /// Maximum number of cached (subsector, day-window) entries
    pub max_entries: usize,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            news_ttl: Duration::hours(1),
            max_entries: 500,
            enabled: true,
        }
    }
}

impl CacheConfig {
    pub fn new(news_ttl: Duration, max_entries: usize) -> Self {
        Self {
            news_ttl,
            max_entries,
            enabled: true,
        }
    }
}

/// Cache key for article lists: one entry per subsector and day-window
/// combination.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct CacheKey {
    pub subsector: String,
    pub days: u32,
}

impl CacheKey {
    pub fn new(subsector: &str, days: u32) -> Self {
        Self {
            subsector: subsector.to_string(),
            days,
        }
    }
}

/// Cached article list with metadata
#[derive(Clone, Debug)]
pub struct CachedArticles {
    pub data: Vec<Article>,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl CachedArticles {
    pub fn new(data: Vec<Article>, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Utc::now(),
            ttl,
        }
    }

    /// Check if the cached list is still valid
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.created_at + self.ttl
    }
}

/// In-memory article cache using DashMap for thread safety.
pub struct NewsCache {
    cache: DashMap<CacheKey, CachedArticles>,
    pub config: CacheConfig,
}

impl NewsCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: DashMap::new(),
            config,
        }
    }

    /// Get the cached articles for a key if present and unexpired
    pub fn get(&self, key: &CacheKey) -> Option<Vec<Article>> {
        if !self.config.enabled {
            return None;
        }

        if let Some(cached) = self.cache.get(key) {
            if cached.is_valid() {
                log::debug!("Cache hit for key: {:?}", key);
                return Some(cached.data.clone());
            } else {
                log::debug!("Cache expired for key: {:?}", key);
                drop(cached);
                self.cache.remove(key);
            }
        }

        log::debug!("Cache miss for key: {:?}", key);
        None
    }

    /// Store an article list in the cache
    pub fn put(&self, key: CacheKey, articles: Vec<Article>) {
        if !self.config.enabled {
            return;
        }

        if self.cache.len() >= self.config.max_entries {
            self.evict_expired();

            if self.cache.len() >= self.config.max_entries {
                self.evict_oldest();
            }
        }

        let cached = CachedArticles::new(articles, self.config.news_ttl);
        self.cache.insert(key.clone(), cached);
        log::debug!("Stored articles in cache with key: {:?}", key);
    }

    /// Remove expired entries from cache
    pub fn evict_expired(&self) {
        let expired_keys: Vec<_> = self
            .cache
            .iter()
            .filter(|entry| !entry.value().is_valid())
            .map(|entry| entry.key().clone())
            .collect();

        let expired_count = expired_keys.len();

        for key in expired_keys {
            self.cache.remove(&key);
        }

        log::debug!("Evicted {} expired news cache entries", expired_count);
    }

    /// Remove oldest entries when at capacity
    fn evict_oldest(&self) {
        let mut entries: Vec<_> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();

        entries.sort_by_key(|(_, created_at)| *created_at);

        // Remove oldest 25% of entries
        let to_remove = (self.config.max_entries / 4).max(1);
        for (key, _) in entries.into_iter().take(to_remove) {
            self.cache.remove(&key);
        }

        log::debug!("Evicted {} oldest news cache entries", to_remove);
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        self.cache.clear();
        log::info!("News cache cleared");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let total_entries = self.cache.len();
        let expired_entries = self
            .cache
            .iter()
            .filter(|entry| !entry.value().is_valid())
            .count();

        CacheStats {
            total_entries,
            valid_entries: total_entries - expired_entries,
            expired_entries,
            max_entries: self.config.max_entries,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub max_entries: usize,
}
