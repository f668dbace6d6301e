//! Row normalization for scraped price-table rows.
//!
//! Each check is gated on the row being long enough to hold the cell it
//! looks at. Rows without a price cell are dropped so that every row that
//! comes out carries a positive price.

use tracing::debug;

use crate::models::{Column, PriceRow, PREMIUM_PRICING_MARKER};
use crate::parsers::{clean_text, fix_price_format, is_valid_price, translate_note_code};

/// Normalize one row of cell texts. `None` means the row is discarded.
pub fn normalize_row(cells: Vec<String>) -> Option<PriceRow> {
    let mut cells: Vec<String> = cells.iter().map(|cell| clean_text(cell)).collect();

    let note = Column::Note.index();
    if cells.len() > note {
        cells[note] = translate_note_code(&cells[note]);
    }

    let price = Column::Price.index();
    if cells.len() <= price {
        debug!("Dropping row without a price cell: {:?}", cells);
        return None;
    }
    cells[price] = fix_price_format(&cells[price]);
    if !is_valid_price(&cells[price]) {
        debug!("Dropping row with invalid price {:?}", cells[price]);
        return None;
    }

    let mut row = PriceRow::from_cells(cells);
    if !row.manufacturer.is_empty() {
        row.note.push_str(PREMIUM_PRICING_MARKER);
    }

    Some(row)
}

/// Normalize all rows, keeping table order.
pub fn normalize_rows<I>(rows: I) -> Vec<PriceRow>
where
    I: IntoIterator<Item = Vec<String>>,
{
    rows.into_iter().filter_map(normalize_row).collect()
}
