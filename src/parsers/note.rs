use crate::models::{
    NOTE_REPRESENTATIVE, NOTE_TEMPORARY_PRICE, REPRESENTATIVE_GLYPHS, TEMPORARY_PRICE_GLYPHS,
};

/// Map the site's note glyphs to readable labels. Anything else is kept.
pub fn translate_note_code(note: &str) -> String {
    if REPRESENTATIVE_GLYPHS.contains(&note) {
        NOTE_REPRESENTATIVE.to_string()
    } else if TEMPORARY_PRICE_GLYPHS.contains(&note) {
        NOTE_TEMPORARY_PRICE.to_string()
    } else {
        note.to_string()
    }
}
