//! Plain text table rendering for terminals.

use crate::model::{ExhibitRecord, ExhibitTable};

/// Default cap on the width of a single column.
pub const DEFAULT_MAX_CELL_WIDTH: usize = 48;

/// Render a table as aligned plain-text columns.
///
/// Cells longer than `max_cell_width` characters are cut and end in `…`.
pub fn to_text_table(table: &ExhibitTable, max_cell_width: usize) -> String {
    let max_cell_width = max_cell_width.max(4);
    let rows: Vec<[String; 7]> = table
        .iter()
        .map(|r| r.cells().map(|c| truncate(&c, max_cell_width)))
        .collect();

    let mut widths = ExhibitRecord::COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, ExhibitRecord::COLUMNS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a, I>(out: &mut String, cells: I, widths: &[usize; 7])
where
    I: Iterator<Item = &'a str>,
{
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn truncate(cell: &str, max: usize) -> String {
    if cell.chars().count() <= max {
        return cell.to_string();
    }
    let mut cut: String = cell.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
