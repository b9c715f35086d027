use chrono::Duration;
use getset::Getters;
use log::info;
use market_data_client::cache::CacheConfig as QuoteCacheConfig;
use market_data_client::QuoteClient;
use news_client::cache::CacheConfig as NewsCacheConfig;
use news_client::NewsClient;
use std::sync::Arc;

use super::config::Config;

const QUOTE_CACHE_MAX_ENTRIES: usize = 1000;
const NEWS_CACHE_MAX_ENTRIES: usize = 500;

/// Request context handed to every route: the two data clients and
/// the loaded configuration.
#[derive(Getters)]
#[get = "pub"]
pub struct Context {
    quote_client: QuoteClient,
    news_client: NewsClient,
    config: Config,
}

impl Context {
    pub fn new(quote_client: QuoteClient, news_client: NewsClient, config: Config) -> Self {
        Self {
            quote_client,
            news_client,
            config,
        }
    }

    /// Build the live clients from configuration.
    pub fn from_config(config: Config) -> Self {
        let quote_client = QuoteClient::with_cache(QuoteCacheConfig::new(
            Duration::hours(*config.quote_cache_ttl_hours()),
            QUOTE_CACHE_MAX_ENTRIES,
        ));
        let news_client = NewsClient::with_cache(
            config.news_api_key().clone(),
            NewsCacheConfig::new(
                Duration::hours(*config.news_cache_ttl_hours()),
                NEWS_CACHE_MAX_ENTRIES,
            ),
        );

        info!(
            "Initialized clients (quote TTL: {}h, news TTL: {}h, news credential: {})",
            config.quote_cache_ttl_hours(),
            config.news_cache_ttl_hours(),
            if news_client.has_credential() {
                "configured"
            } else {
                "missing, serving mock articles"
            }
        );

        Self::new(quote_client, news_client, config)
    }
}

pub type ContextPointer = Arc<Context>;
