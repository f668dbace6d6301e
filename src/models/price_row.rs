use serde::{Deserialize, Serialize};

use super::Column;

/// One normalized line of the price table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRow {
    pub name: String,
    pub form: String,
    pub price: String,
    pub manufacturer: String,
    pub note: String,
    pub source: String,
}

impl PriceRow {
    /// Builds a row from scraped cells. Missing trailing cells become empty,
    /// cells past the sixth are ignored.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut cells = cells.into_iter();
        let mut next = || cells.next().unwrap_or_default();

        Self {
            name: next(),
            form: next(),
            price: next(),
            manufacturer: next(),
            note: next(),
            source: next(),
        }
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Form => &self.form,
            Column::Price => &self.price,
            Column::Manufacturer => &self.manufacturer,
            Column::Note => &self.note,
            Column::Source => &self.source,
        }
    }

    pub fn cells(&self) -> [&str; 6] {
        Column::ALL.map(|column| self.get(column))
    }
}
