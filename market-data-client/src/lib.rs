pub mod cache;
mod client;
mod error;
mod mock;
mod quote;

#[cfg(test)]
mod tests;

use cache::{CacheConfig, QuoteCache};
pub use client::{QuoteProvider, YahooFinance};
pub use error::Error;
use futures::future::join_all;
pub use mock::{mock_quote, mock_quotes};
pub use quote::Quote;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use surf::Client;
use utils::surf_logging::SurfLogging;

// Re-export cache types
pub use cache::{CacheStats, CachedQuote};

/// Most tickers accepted in a single fetch; anything past the cap is
/// silently dropped.
pub const MAX_TICKERS_PER_REQUEST: usize = 20;

/// Per-call timeout for the quote provider.
const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(5);

/// Quote fetcher with a per-ticker TTL cache in front of a live
/// provider and deterministic mock fallback behind it.
#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    provider: Arc<dyn QuoteProvider>,
    cache: Arc<QuoteCache>,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteClient {
    /// Create a client backed by Yahoo Finance with default cache settings
    pub fn new() -> Self {
        Self::with_cache(CacheConfig::default())
    }

    /// Create a Yahoo Finance backed client with explicit cache settings
    pub fn with_cache(cache_config: CacheConfig) -> Self {
        Self::with_provider(Arc::new(YahooFinance), cache_config)
    }

    /// Create a client over an arbitrary provider, injected explicitly
    pub fn with_provider(provider: Arc<dyn QuoteProvider>, cache_config: CacheConfig) -> Self {
        Self {
            http: build_http(),
            provider,
            cache: Arc::new(QuoteCache::new(cache_config)),
        }
    }

    /// Fetch quotes for a batch of tickers.
    ///
    /// Tickers are uppercased, deduplicated preserving first-occurrence
    /// order and capped at [`MAX_TICKERS_PER_REQUEST`]. Each requested
    /// ticker yields exactly one record, live where the cache or the
    /// provider can supply one and mock otherwise. Never fails.
    pub async fn fetch(&self, tickers: &[String]) -> Vec<Quote> {
        let batch = normalize_tickers(tickers);
        if batch.is_empty() {
            return vec![];
        }

        // Split into cached vs uncached
        let mut results: Vec<Option<Quote>> = Vec::with_capacity(batch.len());
        let mut uncached: Vec<(usize, &str)> = vec![];

        for (i, ticker) in batch.iter().enumerate() {
            match self.cache.get(ticker) {
                Some(hit) => results.push(Some(hit)),
                None => {
                    results.push(None);
                    uncached.push((i, ticker.as_str()));
                }
            }
        }

        if !uncached.is_empty() {
            let calls = uncached
                .iter()
                .map(|(_, ticker)| self.provider.quote(ticker, &self.http));
            let fetched = join_all(calls).await;

            for ((slot, ticker), outcome) in uncached.into_iter().zip(fetched) {
                let quote = match outcome {
                    Ok(quote) => {
                        self.cache.put(ticker.to_string(), quote.clone());
                        quote
                    }
                    Err(err) => {
                        // Failures are isolated per ticker
                        log::warn!("Quote provider failed for {}, using mock: {}", ticker, err);
                        mock::mock_quote(ticker)
                    }
                };
                results[slot] = Some(quote);
            }
        }

        results
            .into_iter()
            .zip(batch.iter())
            .map(|(slot, ticker)| slot.unwrap_or_else(|| mock::mock_quote(ticker)))
            .collect()
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Clear the quote cache
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

/// Uppercase, deduplicate (keeping first-occurrence order) and cap the
/// requested tickers. Symbol shape is not validated here: whatever the
/// provider cannot resolve falls back to a mock record per ticker.
pub fn normalize_tickers(tickers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tickers
        .iter()
        .map(|ticker| ticker.trim().to_uppercase())
        .filter(|ticker| !ticker.is_empty())
        .filter(|ticker| seen.insert(ticker.clone()))
        .take(MAX_TICKERS_PER_REQUEST)
        .collect()
}
