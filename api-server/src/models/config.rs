use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use getset::Getters;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;

const CONFIG_FILE: &str = "config.yaml";
const ENV_PREFIX: &str = "COMPASS_";

/// Server configuration, layered from `config.yaml` and `COMPASS_*`
/// environment variables (env wins).
#[serde_inline_default]
#[derive(Debug, Clone, Deserialize, Getters)]
#[get = "pub"]
pub struct Config {
    #[serde_inline_default(3001)]
    port: u16,

    /// NewsAPI credential; absent or placeholder means mock-only news
    #[serde_inline_default(None)]
    news_api_key: Option<String>,

    #[serde_inline_default(6)]
    quote_cache_ttl_hours: i64,

    #[serde_inline_default(1)]
    news_cache_ttl_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            news_api_key: None,
            quote_cache_ttl_hours: 6,
            news_cache_ttl_hours: 1,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }
}
