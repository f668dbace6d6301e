pub mod normalize;
pub mod note;
pub mod price;
pub mod table;

pub use normalize::*;
pub use note::*;
pub use price::*;
pub use table::*;

/// Cell text as shown: surrounding whitespace removed.
pub fn clean_text(text: &str) -> String {
    text.trim().to_string()
}
