//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Widest display width across the values, floored at the header width.
pub fn fit_width<'a, I>(values: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .max(min)
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Pad a cell to the column width, accounting for wide glyphs
    /// (stars, CJK origin names) that count as two terminal cells.
    fn pad(cell: &str, width: usize) -> String {
        let visible = UnicodeWidthStr::width(cell);
        let pad = width.saturating_sub(visible);
        format!("{}{}", cell, " ".repeat(pad))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&Self::pad(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
