pub mod yahoo;

use crate::{Error, Quote};
use async_trait::async_trait;
use surf::Client;

pub use yahoo::YahooFinance;

/// A source of live equity quotes, queried one ticker at a time so a
/// slow or failing symbol does not take the rest of the batch with it.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn quote(&self, ticker: &str, http: &Client) -> Result<Quote, Error>;
}
