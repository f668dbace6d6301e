use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{SearchError, SearchResult};

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Invalid row selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Invalid cell selector"));

/// Pull the cell texts of the result table with the given id.
///
/// The first row is the column header and the last is the footer; both are
/// skipped. Cell text is returned raw, normalization happens later.
pub fn extract_table_rows(html: &str, table_id: &str) -> SearchResult<Vec<Vec<String>>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse(&format!(r#"table[id="{}"]"#, table_id))
        .map_err(|_| SearchError::DataShape(format!("bad table id {:?}", table_id)))?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| SearchError::DataShape(format!("table #{} not found", table_id)))?;

    let rows: Vec<Vec<String>> = table
        .select(&ROW_SELECTOR)
        .map(|row| {
            row.select(&CELL_SELECTOR)
                .map(|cell| cell.text().collect::<String>())
                .collect()
        })
        .collect();

    debug!("Table #{} has {} rows including header and footer", table_id, rows.len());

    if rows.len() < 2 {
        return Ok(Vec::new());
    }

    let body_end = rows.len() - 1;
    Ok(rows.into_iter().take(body_end).skip(1).collect())
}
