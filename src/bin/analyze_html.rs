use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::fs;
use std::sync::Arc;

use drug_price_search::config::Config;
use drug_price_search::parsers::{extract_table_rows, normalize_rows};
use drug_price_search::scrapers::YaopinnetScraper;
use drug_price_search::utils::http::{create_client, fetch_page};

const SAMPLE_FILE: &str = "jiage_sample.html";

#[tokio::main]
async fn main() -> Result<()> {
    let keyword = std::env::args().nth(1).unwrap_or_else(|| "阿莫西林".to_string());

    let config = Arc::new(Config::load()?);
    let client = create_client(&config)?;
    let url = YaopinnetScraper::new(config.clone()).search_url(&keyword)?;

    println!("Fetching {}...", url);
    let html = fetch_page(&client, url.as_str()).await?;
    fs::write(SAMPLE_FILE, &html).with_context(|| format!("Failed to write {}", SAMPLE_FILE))?;
    println!("Saved {} bytes to {}", html.len(), SAMPLE_FILE);

    let document = Html::parse_document(&html);
    let table_selector = Selector::parse("table").unwrap();
    for table in document.select(&table_selector) {
        let id = table.value().attr("id").unwrap_or("-");
        let rows = table.select(&Selector::parse("tr").unwrap()).count();
        println!("table id={} rows={}", id, rows);
    }

    let raw_rows = match extract_table_rows(&html, &config.table_id) {
        Ok(rows) => rows,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let mut widths: Vec<usize> = raw_rows.iter().map(Vec::len).collect();
    widths.sort_unstable();
    widths.dedup();
    println!("Body rows: {} (cell counts seen: {:?})", raw_rows.len(), widths);

    let rows = normalize_rows(raw_rows);
    println!("Rows kept after normalization: {}", rows.len());
    for row in rows.iter().take(5) {
        println!("  {:?}", row.cells());
    }

    Ok(())
}
