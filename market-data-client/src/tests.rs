use crate::cache::CacheConfig;
use crate::client::QuoteProvider;
use crate::{normalize_tickers, Error, Quote, QuoteClient, MAX_TICKERS_PER_REQUEST};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use surf::Client;

/// Provider stub that counts calls and answers with a fixed-price
/// quote, or an error for tickers in its failure list.
struct SpyProvider {
    calls: AtomicUsize,
    failing: Vec<String>,
}

impl SpyProvider {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing: vec![],
        }
    }

    fn failing_for(tickers: &[&str]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing: tickers.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for SpyProvider {
    async fn quote(&self, ticker: &str, _http: &Client) -> Result<Quote, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.iter().any(|t| t == ticker) {
            return Err(Error::MissingPrice(ticker.to_string()));
        }

        Ok(Quote {
            ticker: ticker.to_string(),
            name: format!("{} Inc.", ticker),
            price: 100.0,
            change: Some(1.0),
            change_pct: Some(1.0),
            market_cap: None,
            pe_ratio: None,
            week52_high: None,
            week52_low: None,
            is_mock: false,
        })
    }
}

fn tickers(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_normalize_dedupes_and_uppercases() {
    let input = tickers(&["aapl", "AAPL", " msft ", "MSFT", "googl"]);
    let normalized = normalize_tickers(&input);
    assert_eq!(normalized, vec!["AAPL", "MSFT", "GOOGL"]);
}

#[test]
fn test_normalize_drops_only_blank_entries() {
    let input = tickers(&["AAPL", "", "  ", "BRK.B", "9LIVES", "^GSPC"]);
    let normalized = normalize_tickers(&input);
    // Shape is not policed: unresolvable symbols get a mock record later
    assert_eq!(normalized, vec!["AAPL", "BRK.B", "9LIVES", "^GSPC"]);
}

#[test]
fn test_normalize_caps_batch_size() {
    let input: Vec<String> = (0..30).map(|i| format!("T{}", i)).collect();
    let normalized = normalize_tickers(&input);
    assert_eq!(normalized.len(), MAX_TICKERS_PER_REQUEST);
    assert_eq!(normalized[0], "T0");
    assert_eq!(normalized[19], "T19");
}

#[tokio::test]
async fn test_fetch_preserves_input_order() {
    let client = QuoteClient::with_provider(Arc::new(SpyProvider::new()), CacheConfig::default());

    let quotes = client.fetch(&tickers(&["MSFT", "AAPL", "GOOGL"])).await;

    let order: Vec<_> = quotes.iter().map(|q| q.ticker.as_str()).collect();
    assert_eq!(order, vec!["MSFT", "AAPL", "GOOGL"]);
    assert!(quotes.iter().all(|q| !q.is_mock));
}

#[tokio::test]
async fn test_unusual_symbols_still_get_one_record_each() {
    let provider = Arc::new(SpyProvider::failing_for(&["9LIVES", "^GSPC"]));
    let client = QuoteClient::with_provider(provider, CacheConfig::default());

    let quotes = client.fetch(&tickers(&["AAPL", "9LIVES", "^GSPC"])).await;

    assert_eq!(quotes.len(), 3);
    assert!(!quotes[0].is_mock);
    assert!(quotes[1].is_mock);
    assert_eq!(quotes[1].ticker, "9LIVES");
    assert!(quotes[2].is_mock);
    assert_eq!(quotes[2].ticker, "^GSPC");
}

#[tokio::test]
async fn test_fetch_length_matches_deduplicated_input() {
    let client = QuoteClient::with_provider(Arc::new(SpyProvider::new()), CacheConfig::default());

    let quotes = client
        .fetch(&tickers(&["AAPL", "aapl", "MSFT", "AAPL"]))
        .await;

    assert_eq!(quotes.len(), 2);
}

#[tokio::test]
async fn test_second_fetch_is_served_from_cache() {
    let provider = Arc::new(SpyProvider::new());
    let client = QuoteClient::with_provider(provider.clone(), CacheConfig::default());

    client.fetch(&tickers(&["AAPL"])).await;
    client.fetch(&tickers(&["AAPL"])).await;

    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_expired_entry_triggers_fresh_provider_call() {
    let provider = Arc::new(SpyProvider::new());
    let client = QuoteClient::with_provider(
        provider.clone(),
        CacheConfig::new(Duration::zero(), 100),
    );

    client.fetch(&tickers(&["AAPL"])).await;
    client.fetch(&tickers(&["AAPL"])).await;

    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_failed_ticker_falls_back_to_mock_in_isolation() {
    let provider = Arc::new(SpyProvider::failing_for(&["BAD"]));
    let client = QuoteClient::with_provider(provider, CacheConfig::default());

    let quotes = client.fetch(&tickers(&["AAPL", "BAD", "MSFT"])).await;

    assert_eq!(quotes.len(), 3);
    assert!(!quotes[0].is_mock);
    assert!(quotes[1].is_mock);
    assert!(!quotes[2].is_mock);

    // Mock substitute still has placeholder values for every field
    assert_eq!(quotes[1].ticker, "BAD");
    assert!(quotes[1].price > 0.0);
    assert!(quotes[1].market_cap.is_some());
}

#[tokio::test]
async fn test_mock_results_are_not_cached() {
    let provider = Arc::new(SpyProvider::failing_for(&["BAD"]));
    let client = QuoteClient::with_provider(provider.clone(), CacheConfig::default());

    client.fetch(&tickers(&["BAD"])).await;
    client.fetch(&tickers(&["BAD"])).await;

    // Each request retries the provider since only live quotes are cached
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_empty_input_returns_empty() {
    let provider = Arc::new(SpyProvider::new());
    let client = QuoteClient::with_provider(provider.clone(), CacheConfig::default());

    let quotes = client.fetch(&[]).await;

    assert!(quotes.is_empty());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_cache_stats_reflect_fetches() {
    let client = QuoteClient::with_provider(Arc::new(SpyProvider::new()), CacheConfig::default());

    client.fetch(&tickers(&["AAPL", "MSFT"])).await;

    let stats = client.cache_stats();
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.valid_entries, 2);
}

#[test]
fn test_mock_quotes_preserve_order() {
    let batch = tickers(&["AAPL", "MSFT"]);
    let mocks = crate::mock_quotes(&batch);

    assert_eq!(mocks.len(), 2);
    assert_eq!(mocks[0].ticker, "AAPL");
    assert_eq!(mocks[1].ticker, "MSFT");
    assert!(mocks.iter().all(|q| q.is_mock));
}
