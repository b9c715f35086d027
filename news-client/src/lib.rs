mod article;
pub mod cache;
mod client;
mod error;
mod mock;


pub use article::Article;
use cache::{CacheConfig, CacheKey, NewsCache};
pub use client::{NewsApi, NewsProvider};
pub use error::Error;
pub use mock::mock_articles;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use surf::Client;
use utils::surf_logging::SurfLogging;

// Re-export cache types
pub use cache::{CacheStats, CachedArticles};

/// Day window applied when the caller does not supply one.
pub const DEFAULT_NEWS_DAYS: u32 = 7;

/// Placeholder value shipped in sample configs; treated as no
/// credential at all.
const PLACEHOLDER_API_KEY: &str = "your_newsapi_key_here";

/// Per-call timeout for the news provider.
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(5);

/// News fetcher with a per-(subsector, day-window) TTL cache in front
/// of a live provider and mock fallback behind it.
#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    provider: Arc<dyn NewsProvider>,
    cache: Arc<NewsCache>,
    api_key: Option<String>,
}

impl NewsClient {
    /// Create a NewsAPI backed client. An absent, empty or placeholder
    /// `api_key` disables live fetching entirely.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_cache(api_key, CacheConfig::default())
    }

    /// Create a NewsAPI backed client with explicit cache settings
    pub fn with_cache(api_key: Option<String>, cache_config: CacheConfig) -> Self {
        Self::with_provider(Arc::new(NewsApi), api_key, cache_config)
    }

    /// Create a client over an arbitrary provider, injected explicitly
    pub fn with_provider(
        provider: Arc<dyn NewsProvider>,
        api_key: Option<String>,
        cache_config: CacheConfig,
    ) -> Self {
        Self {
            http: build_http(),
            provider,
            cache: Arc::new(NewsCache::new(cache_config)),
            api_key: api_key.filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY),
        }
    }

    /// Whether a usable provider credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch articles for a subsector's news query over the trailing
    /// `days` window.
    ///
    /// Serves from cache when possible. Without a credential the
    /// network is skipped and mock articles are returned. Provider
    /// errors are logged and answered with mock articles. Never fails.
    pub async fn fetch(&self, subsector_id: &str, query: &str, days: u32) -> Vec<Article> {
        let key = CacheKey::new(subsector_id, days);
        if let Some(cached) = self.cache.get(&key) {
            log::info!("Returning cached articles for subsector: {}", subsector_id);
            return cached;
        }

        let api_key = match &self.api_key {
            Some(api_key) => api_key,
            None => {
                log::debug!("No news credential configured, serving mock articles");
                return mock::mock_articles(subsector_id, days);
            }
        };

        match self.provider.articles(query, days, api_key, &self.http).await {
            Ok(articles) => {
                self.cache.put(key, articles.clone());
                articles
            }
            Err(err) => {
                log::warn!(
                    "News provider failed for subsector {}, using mock: {}",
                    subsector_id,
                    err
                );
                mock::mock_articles(subsector_id, days)
            }
        }
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Clear the news cache
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Evict expired cache entries
    pub fn evict_expired_cache(&self) {
        self.cache.evict_expired();
    }
}

fn build_http() -> Client {
    let client: Client = surf::Config::new()
        .set_timeout(Some(REQUEST_TIMEOUT))
        .try_into()
        .unwrap_or_else(|_| Client::new());
    client.with(SurfLogging)
}
