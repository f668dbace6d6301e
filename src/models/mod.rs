pub mod column;
pub mod price_row;

pub use column::*;
pub use price_row::*;

// Note labels shown in place of the site's glyphs
pub const NOTE_REPRESENTATIVE: &str = "代表品";
pub const NOTE_TEMPORARY_PRICE: &str = "临时价格";

/// Appended to the note of every row that names a manufacturer.
pub const PREMIUM_PRICING_MARKER: &str = "[优质优价药品最高零售价 单独定价]";

pub const REPRESENTATIVE_GLYPHS: [&str; 3] = ["*", "★", "﹡"];
pub const TEMPORARY_PRICE_GLYPHS: [&str; 3] = ["△", "#", "＃"];
