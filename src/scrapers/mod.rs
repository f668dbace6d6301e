use async_trait::async_trait;
use reqwest::Client;

use crate::error::SearchResult;
use crate::models::PriceRow;

mod yaopinnet;

pub use yaopinnet::YaopinnetScraper;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// One search round trip: fetch, scrape, normalize.
    async fn search(&self, client: &Client, keyword: &str) -> SearchResult<Vec<PriceRow>>;
    fn name(&self) -> &str;
}
