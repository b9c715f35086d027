use super::QuoteProvider;
use crate::{Error, Quote};
use async_trait::async_trait;
use serde::Deserialize;
use surf::Client;
use urlencoding::encode;

const QUOTE_ENDPOINT: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Yahoo Finance v7 quote endpoint.
pub struct YahooFinance;

#[derive(Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<RawQuote>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuote {
    symbol: String,
    long_name: Option<String>,
    short_name: Option<String>,
    regular_market_price: Option<f64>,
    regular_market_change: Option<f64>,
    regular_market_change_percent: Option<f64>,
    market_cap: Option<f64>,
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<f64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
}

impl RawQuote {
    /// A quote without a regular market price is useless to us and is
    /// treated the same as a provider failure.
    fn normalize(self) -> Result<Quote, Error> {
        let price = self
            .regular_market_price
            .ok_or_else(|| Error::MissingPrice(self.symbol.clone()))?;

        let name = self
            .long_name
            .or(self.short_name)
            .unwrap_or_else(|| self.symbol.clone());

        Ok(Quote {
            ticker: self.symbol,
            name,
            price,
            change: self.regular_market_change,
            change_pct: self.regular_market_change_percent,
            market_cap: self.market_cap,
            pe_ratio: self.trailing_pe,
            week52_high: self.fifty_two_week_high,
            week52_low: self.fifty_two_week_low,
            is_mock: false,
        })
    }
}

#[async_trait]
impl QuoteProvider for YahooFinance {
    async fn quote(&self, ticker: &str, http: &Client) -> Result<Quote, Error> {
        let url = format!("{}?symbols={}", QUOTE_ENDPOINT, encode(ticker));

        let mut response = http.get(&url).await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status() as u16));
        }

        let envelope: QuoteEnvelope = response
            .body_json()
            .await
            .map_err(|err| Error::Payload(err.to_string()))?;

        envelope
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(ticker.to_string()))?
            .normalize()
    }
}
