//! Table types.

use super::{InlineNode, Paragraph};
use serde::{Deserialize, Serialize};

/// A table assembled from markdown-style pipe rows.
///
/// A table with an empty body is valid and renders header-only; a table
/// with an empty header and no rows renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells (first surviving row)
    pub header: Vec<TableCell>,

    /// Body rows
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create a table with the given header cells.
    pub fn with_header(header: Vec<TableCell>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Add a body row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest of header and body rows).
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Check if the table has neither header nor body.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Header cell texts, with math in its delimiters.
    pub fn header_texts(&self) -> Vec<String> {
        self.header.iter().map(TableCell::plain_text).collect()
    }

    /// Body cell texts, row by row.
    pub fn body_texts(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(TableRow::texts).collect()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(self.header_texts().join("\t"))
            .filter(|line| !line.is_empty())
            .chain(self.rows.iter().map(|row| row.texts().join("\t")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table body row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from plain text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Cell texts of this row.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(TableCell::plain_text).collect()
    }
}

/// A table cell. Cells carry inline content so math works inside tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Paragraph,
}

impl TableCell {
    /// Create a cell with plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Paragraph::with_text(text),
        }
    }

    /// Create a cell from parsed inline nodes.
    pub fn from_nodes(nodes: Vec<InlineNode>) -> Self {
        Self {
            content: Paragraph::from_nodes(nodes),
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
