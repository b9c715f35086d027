use serde::{Deserialize, Serialize};

/// Normalized equity quote as served by the API.
///
/// Live quotes always carry a price; the remaining market fields are
/// nullable because the provider omits them for thinly covered symbols.
/// Mock quotes have every field populated and `is_mock` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change: Option<f64>,
    pub change_pct: Option<f64>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    pub is_mock: bool,
}
