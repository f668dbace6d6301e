use std::cmp::Ordering;

use crate::models::SortDirection;
use crate::parsers::parse_price_value;

/// Comparison key for one cell. Cells that read as numbers (thousands
/// separators allowed) compare numerically, everything else as text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    pub fn from_cell(cell: &'a str) -> Self {
        match parse_price_value(cell) {
            Some(value) => SortKey::Number(value),
            None => SortKey::Text(cell),
        }
    }
}

/// Total order over keys: numbers first, then text.
pub fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

/// Stable sort of `items` by the cell `cell_of` picks out. Equal keys keep
/// their relative order in both directions.
pub fn sort_by_cell<T, F>(items: &mut [T], direction: SortDirection, cell_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| {
        let ordering = compare_keys(&SortKey::from_cell(cell_of(a)), &SortKey::from_cell(cell_of(b)));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
