use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::config::Config;
use crate::error::{SearchError, SearchResult};

pub fn create_client(config: &Config) -> SearchResult<Client> {
    let client = ClientBuilder::new()
        .user_agent(&config.user_agent)
        .timeout(config.timeout())
        .build()?;

    Ok(client)
}

/// Single GET, no retry. The body is decoded as UTF-8 whatever the
/// response headers claim. Failures are returned, not logged.
pub async fn fetch_page(client: &Client, url: &str) -> SearchResult<String> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(String::from_utf8_lossy(&body).into_owned())
}
