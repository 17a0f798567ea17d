//! Aligned plain-text tables.
//!
//! `TextTable` collects a header and pre-formatted rows, then lays them out
//! in a single pass: every column is as wide as its widest cell (header
//! included), cells are left-justified, and a dashed rule separates the
//! header from the body.
//!
//! ```text
//! A   | B
//! ----+---
//! x   | yy
//! xxx | y
//! ```

use std::fmt;

use console::{measure_text_width, pad_str, Alignment};

use crate::error::SummaryError;
use crate::Result;

/// Separator between adjacent cells.
const COLUMN_DELIMITER: &str = " | ";
/// Separator between adjacent column rules on the header line.
const RULE_DELIMITER: &str = "-+-";

/// A table of display strings with a fixed column count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    /// Column labels
    pub headers: Vec<String>,
    /// Data rows, in insertion order
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Create an empty table with no header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column labels. Must be called once, before any row.
    pub fn set_header<I, S>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.headers.is_empty() || !self.rows.is_empty() {
            return Err(SummaryError::HeaderAlreadySet);
        }
        self.headers = columns.into_iter().map(Into::into).collect();
        Ok(())
    }

    /// Append a row. Its length must match the header's.
    pub fn add_row<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.headers.is_empty() {
            return Err(SummaryError::MissingHeader);
        }
        let row: Vec<String> = values.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(SummaryError::ArityMismatch {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display width of every column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }
        widths
    }

    /// Render the table. Empty when no header was set.
    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&format_line(&self.headers, &widths));
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join(RULE_DELIMITER));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format_line(row, &widths));
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pad each cell to its column width and join with the delimiter.
fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join(COLUMN_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TextTable {
        let mut table = TextTable::new();
        table.set_header(["A", "B"]).unwrap();
        table.add_row(["x", "yy"]).unwrap();
        table.add_row(["xxx", "y"]).unwrap();
        table
    }

    #[test]
    fn test_column_widths() {
        assert_eq!(sample_table().column_widths(), vec![3, 2]);
    }

    #[test]
    fn test_render_layout() {
        let rendered = sample_table().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["A   | B ", "----+---", "x   | yy", "xxx | y "]);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_every_cell_padded_to_column_width() {
        let rendered = sample_table().render();
        for line in rendered.lines().filter(|l| !l.starts_with('-')) {
            let cells: Vec<&str> = line.split(COLUMN_DELIMITER).collect();
            assert_eq!(cells[0].len(), 3);
            assert_eq!(cells[1].len(), 2);
        }
    }

    #[test]
    fn test_header_wider_than_cells() {
        let mut table = TextTable::new();
        table.set_header(["Keyspace", "N"]).unwrap();
        table.add_row(["ks", "12345"]).unwrap();
        assert_eq!(table.column_widths(), vec![8, 5]);
        assert_eq!(
            table.render(),
            "Keyspace | N    \n---------+------\nks       | 12345\n"
        );
    }

    #[test]
    fn test_wide_characters_measured_by_display_width() {
        let mut table = TextTable::new();
        table.set_header(["name"]).unwrap();
        table.add_row(["表格表格表"]).unwrap();
        assert_eq!(table.column_widths(), vec![10]);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut table = TextTable::new();
        table.set_header(["k"]).unwrap();
        for key in ["zeta", "alpha", "mid"] {
            table.add_row([key]).unwrap();
        }
        let body: Vec<String> = table
            .render()
            .lines()
            .skip(2)
            .map(|l| l.trim_end().to_string())
            .collect();
        assert_eq!(body, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_arity_mismatch() {
        let mut table = sample_table();
        let err = table.add_row(["only one"]).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::ArityMismatch {
                expected: 2,
                found: 1
            }
        ));
        let err = table.add_row(["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, SummaryError::ArityMismatch { found: 3, .. }));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_row_before_header() {
        let mut table = TextTable::new();
        let err = table.add_row(["x"]).unwrap_err();
        assert!(matches!(err, SummaryError::MissingHeader));
    }

    #[test]
    fn test_header_only_once() {
        let mut table = sample_table();
        let err = table.set_header(["C", "D"]).unwrap_err();
        assert!(matches!(err, SummaryError::HeaderAlreadySet));
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn test_header_without_rows() {
        let mut table = TextTable::new();
        table.set_header(["Keyspace", "Table"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.render(), "Keyspace | Table\n---------+------\n");
    }

    #[test]
    fn test_display_matches_render() {
        let table = sample_table();
        assert_eq!(table.to_string(), table.render());
        assert_eq!(TextTable::new().to_string(), "");
    }
}
