use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::error::SearchResult;
use crate::models::PriceRow;
use crate::parsers::{extract_table_rows, normalize_rows};
use crate::scrapers::PriceSource;
use crate::utils::http::fetch_page;

pub struct YaopinnetScraper {
    config: Arc<Config>,
}

impl YaopinnetScraper {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Endpoint with the keyword as its `keyword` query parameter. An empty
    /// keyword is sent as-is.
    pub fn search_url(&self, keyword: &str) -> SearchResult<Url> {
        let mut url = Url::parse(&self.config.endpoint_url)?;
        url.query_pairs_mut().append_pair("keyword", keyword);
        Ok(url)
    }
}

#[async_trait]
impl PriceSource for YaopinnetScraper {
    async fn search(&self, client: &Client, keyword: &str) -> SearchResult<Vec<PriceRow>> {
        let url = self.search_url(keyword)?;
        info!("Searching {} for {:?}", self.name(), keyword);

        let html = fetch_page(client, url.as_str()).await?;
        let raw_rows = extract_table_rows(&html, &self.config.table_id)?;
        let scraped = raw_rows.len();
        let rows = normalize_rows(raw_rows);

        info!(
            "Kept {} of {} table rows for {:?}",
            rows.len(),
            scraped,
            keyword
        );
        Ok(rows)
    }

    fn name(&self) -> &str {
        "yaopinnet"
    }
}
