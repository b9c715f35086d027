use crate::Quote;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Configuration for the quote cache
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// How long a fetched quote stays servable
    pub quote_ttl: Duration,
    /// Maximum number of cached tickers
    pub max_entries: usize,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            quote_ttl: Duration::hours(6),
            max_entries: 1000,
            enabled: true,
        }
    }
}

impl CacheConfig {
    pub fn new(quote_ttl: Duration, max_entries: usize) -> Self {
        Self {
            quote_ttl,
            max_entries,
            enabled: true,
        }
    }
}

/// Cached quote with metadata
#[derive(Clone, Debug)]
pub struct CachedQuote {
    pub data: Quote,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl CachedQuote {
    pub fn new(data: Quote, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Utc::now(),
            ttl,
        }
    }

    /// Check if the cached quote is still valid
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.created_at + self.ttl
    }
}

/// In-memory quote cache keyed by ticker symbol, using DashMap for
/// thread safety.
pub struct QuoteCache {
    cache: DashMap<String, CachedQuote>,
    pub config: CacheConfig,
}

impl QuoteCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: DashMap::new(),
            config,
        }
    }

    /// Get the cached quote for a ticker if present and unexpired
    pub fn get(&self, ticker: &str) -> Option<Quote> {
        if !self.config.enabled {
            return None;
        }

        if let Some(cached) = self.cache.get(ticker) {
            if cached.is_valid() {
                log::debug!("Cache hit for ticker: {}", ticker);
                return Some(cached.data.clone());
            } else {
                log::debug!("Cache expired for ticker: {}", ticker);
                drop(cached);
                self.cache.remove(ticker);
            }
        }

        log::debug!("Cache miss for ticker: {}", ticker);
        None
    }

    /// Store a quote in the cache
    pub fn put(&self, ticker: String, quote: Quote) {
        if !self.config.enabled {
            return;
        }

        if self.cache.len() >= self.config.max_entries {
            self.evict_expired();

            if self.cache.len() >= self.config.max_entries {
                self.evict_oldest();
            }
        }

        let cached = CachedQuote::new(quote, self.config.quote_ttl);
        self.cache.insert(ticker.clone(), cached);
        log::debug!("Stored quote in cache for ticker: {}", ticker);
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

        log::debug!("Evicted {} expired quote cache entries", expired_count);
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

        log::debug!("Evicted {} oldest quote cache entries", to_remove);
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        self.cache.clear();
        log::info!("Quote cache cleared");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_cached_quote_validity() {
        let quote = mock::mock_quote("MSFT");
        let cached = CachedQuote::new(quote.clone(), Duration::seconds(1));

        assert!(cached.is_valid());

        // Simulate expired entry
        let expired = CachedQuote {
            data: quote,
            created_at: Utc::now() - Duration::seconds(2),
            ttl: Duration::seconds(1),
        };

        assert!(!expired.is_valid());
    }

    #[test]
    fn test_get_removes_expired_entry() {
        let cache = QuoteCache::new(CacheConfig::new(Duration::zero(), 100));

        cache.put("AAPL".to_string(), mock::mock_quote("AAPL"));
        assert!(cache.get("AAPL").is_none());

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_stats_counts_valid_entries() {
        let cache = QuoteCache::new(CacheConfig::default());

        cache.put("AAPL".to_string(), mock::mock_quote("AAPL"));
        cache.put("MSFT".to_string(), mock::mock_quote("MSFT"));

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.valid_entries, 2);
        assert_eq!(stats.expired_entries, 0);
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let mut config = CacheConfig::default();
        config.enabled = false;
        let cache = QuoteCache::new(config);

        cache.put("AAPL".to_string(), mock::mock_quote("AAPL"));
        assert!(cache.get("AAPL").is_none());
        assert_eq!(cache.stats().total_entries, 0);
    }
}
