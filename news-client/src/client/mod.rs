pub mod newsapi;

use crate::{Article, Error};
use async_trait::async_trait;
use surf::Client;

pub use newsapi::NewsApi;

/// A source of live news articles for a free-text query over a
/// trailing day window.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn articles(
        &self,
        query: &str,
        days: u32,
        api_key: &str,
        http: &Client,
    ) -> Result<Vec<Article>, Error>;
}
