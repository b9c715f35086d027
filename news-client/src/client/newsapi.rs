use super::NewsProvider;
use crate::{Article, Error};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Deserialize;
use surf::Client;
use urlencoding::encode;

const EVERYTHING_ENDPOINT: &str = "https://newsapi.org/v2/everything";
const PAGE_SIZE: u32 = 10;

/// NewsAPI.org `/v2/everything` search.
pub struct NewsApi;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    source: RawSource,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
}

#[derive(Deserialize)]
struct RawSource {
    name: Option<String>,
}

impl RawArticle {
    /// Articles NewsAPI has redacted keep their slot in the feed with a
    /// "[Removed]" title; those and title-less entries are dropped.
    fn has_usable_title(&self) -> bool {
        match &self.title {
            Some(title) => !title.is_empty() && title != "[Removed]",
            None => false,
        }
    }

    fn normalize(self, index: usize, stamp: i64) -> Article {
        Article {
            id: format!("live-{}-{}", index, stamp),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            source: self.source.name.unwrap_or_else(|| "Unknown".to_string()),
            url: self.url.unwrap_or_default(),
            published_at: self.published_at.unwrap_or_default(),
            is_mock: false,
        }
    }
}

fn normalize_articles(raw: Vec<RawArticle>) -> Vec<Article> {
    let stamp = Utc::now().timestamp_millis();
    raw.into_iter()
        .filter(RawArticle::has_usable_title)
        .enumerate()
        .map(|(index, article)| article.normalize(index, stamp))
        .collect()
}

#[async_trait]
impl NewsProvider for NewsApi {
    async fn articles(
        &self,
        query: &str,
        days: u32,
        api_key: &str,
        http: &Client,
    ) -> Result<Vec<Article>, Error> {
        let from = (Utc::now() - Duration::days(i64::from(days)))
            .format("%Y-%m-%d")
            .to_string();

        let url = format!(
            "{}?q={}&from={}&sortBy=publishedAt&pageSize={}&language=en&apiKey={}",
            EVERYTHING_ENDPOINT,
            encode(query),
            from,
            PAGE_SIZE,
            encode(api_key),
        );

        let mut response = http.get(&url).await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status() as u16));
        }

        let search: SearchResponse = response
            .body_json()
            .await
            .map_err(|err| Error::Payload(err.to_string()))?;

        Ok(normalize_articles(search.articles))
    }
}
