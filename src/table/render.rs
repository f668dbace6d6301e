use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{Column, PriceRow, SortDirection};

const COLUMN_GAP: &str = "  ";
const MAX_CELL_WIDTH: usize = 40;

/// Terminal columns taken by `text`. CJK and fullwidth forms take two,
/// combining marks none.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Cut to at most `width` columns, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in display_width(text)..width {
        out.push(' ');
    }
}

/// Lay out rows under the six headers. `sorted` marks the header of the
/// column the rows are currently ordered by.
pub fn render_rows(rows: &[PriceRow], sorted: Option<(Column, SortDirection)>) -> String {
    let headers: Vec<String> = Column::ALL
        .iter()
        .map(|column| match sorted {
            Some((c, direction)) if c == *column => format!("{} {}", column.header(), direction),
            _ => column.header().to_string(),
        })
        .collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells().iter().map(|cell| truncate(cell, MAX_CELL_WIDTH)).collect())
        .collect();

    let widths: Vec<usize> = (0..Column::ALL.len())
        .map(|i| {
            cells
                .iter()
                .map(|row| display_width(&row[i]))
                .chain(std::iter::once(display_width(&headers[i])))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    write_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, &rule, &widths);
    for row in &cells {
        write_line(&mut out, row, &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        pad(&mut line, cell, *width);
    }
    let _ = writeln!(out, "{}", line.trim_end());
}
