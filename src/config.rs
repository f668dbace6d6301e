use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT_URL: &str = "https://www.yaopinnet.com/tools/load/jiage_Load.asp";
pub const DEFAULT_TABLE_ID: &str = "jiagetable";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Optional config file, looked up in the working directory with any
/// extension the `config` crate understands.
const CONFIG_FILE: &str = "drug_price_search";
const ENV_PREFIX: &str = "DRUG_PRICE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint_url: String,
    pub table_id: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `drug_price_search.*` if present, then `DRUG_PRICE_*` env vars.
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("endpoint_url", DEFAULT_ENDPOINT_URL)?
            .set_default("table_id", DEFAULT_TABLE_ID)?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS as i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to assemble configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_price_table() {
        let config = Config::default();
        assert_eq!(config.table_id, "jiagetable");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.endpoint_url.ends_with("jiage_Load.asp"));
    }

    #[test]
    fn load_without_overrides_matches_defaults() {
        let config = Config::load().unwrap();
        let defaults = Config::default();
        assert_eq!(config.endpoint_url, defaults.endpoint_url);
        assert_eq!(config.table_id, defaults.table_id);
    }
}
