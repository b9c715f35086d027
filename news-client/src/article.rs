use serde::{Deserialize, Serialize};

/// Normalized news article as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub published_at: String,
    pub is_mock: bool,
}
