use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Name,
    Form,
    Price,
    Manufacturer,
    Note,
    Source,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Form,
        Column::Price,
        Column::Manufacturer,
        Column::Note,
        Column::Source,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Form => "form",
            Column::Price => "price",
            Column::Manufacturer => "manufacturer",
            Column::Note => "note",
            Column::Source => "source",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "药品名称",
            Column::Form => "剂型/规格/单位",
            Column::Price => "价格",
            Column::Manufacturer => "生产厂家",
            Column::Note => "备注",
            Column::Source => "来源",
        }
    }

    /// Cell position in a scraped table row.
    pub fn index(&self) -> usize {
        match self {
            Column::Name => 0,
            Column::Form => 1,
            Column::Price => 2,
            Column::Manufacturer => 3,
            Column::Note => 4,
            Column::Source => 5,
        }
    }

    /// Accepts either the column key or its on-screen header.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Column::ALL
            .into_iter()
            .find(|column| column.key().eq_ignore_ascii_case(key) || column.header() == key)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "▲"),
            SortDirection::Descending => write!(f, "▼"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_accepts_keys_and_headers() {
        assert_eq!(Column::from_key("price"), Some(Column::Price));
        assert_eq!(Column::from_key("PRICE"), Some(Column::Price));
        assert_eq!(Column::from_key("生产厂家"), Some(Column::Manufacturer));
        assert_eq!(Column::from_key(" note "), Some(Column::Note));
        assert_eq!(Column::from_key("cost"), None);
    }

    #[test]
    fn indices_follow_table_order() {
        let indices: Vec<usize> = Column::ALL.iter().map(Column::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn flip_toggles() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.flip(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flip(), SortDirection::Ascending);
    }
}
