//! The displayed result grid.
//!
//! `PriceTable` owns the rows on screen and the per-column sort direction.
//! A search replaces the rows wholesale; sorting reorders them in place.

pub mod render;
pub mod sort;

use chrono::{DateTime, Local};
use std::collections::HashMap;
use tracing::debug;

use crate::models::{Column, PriceRow, SortDirection};

pub use render::{display_width, render_rows};
pub use sort::{compare_keys, sort_by_cell, SortKey};

#[derive(Debug, Default)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
    directions: HashMap<Column, SortDirection>,
    sorted_by: Option<(Column, SortDirection)>,
    fetched_at: Option<DateTime<Local>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }

    /// Direction the next sort on `column` will use.
    pub fn direction(&self, column: Column) -> SortDirection {
        self.directions.get(&column).copied().unwrap_or_default()
    }

    /// Swap in a fresh result set. Sort directions survive.
    pub fn replace_rows(&mut self, rows: Vec<PriceRow>) {
        self.rows = rows;
        self.sorted_by = None;
        self.fetched_at = Some(Local::now());
    }

    /// Sort by `column` in its stored direction, then flip that direction
    /// for the next call. Returns the direction that was applied.
    pub fn sort_by(&mut self, column: Column) -> SortDirection {
        let direction = self.direction(column);
        sort_by_cell(&mut self.rows, direction, |row| row.get(column));

        self.directions.insert(column, direction.flip());
        self.sorted_by = Some((column, direction));
        debug!("Sorted {} rows by {} {:?}", self.rows.len(), column.key(), direction);

        direction
    }

    pub fn render(&self) -> String {
        let mut out = render_rows(&self.rows, self.sorted_by);
        if let Some(fetched_at) = self.fetched_at {
            out.push_str(&format!(
                "{} rows, fetched at {}\n",
                self.rows.len(),
                fetched_at.format("%Y-%m-%d %H:%M:%S")
            ));
        }
        out
    }
}
