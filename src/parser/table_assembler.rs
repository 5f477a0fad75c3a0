//! Table assembly from buffered pipe rows.
//!
//! Separator rows (`|---|:--:|`) are markdown syntax, never content, and are
//! dropped. The first surviving row becomes the header and the rest become
//! body rows. Cell text is run through the math span parser so inline math
//! works inside cells.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Table, TableCell, TableRow};

use super::math_span::parse_math_spans;

static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s|:-]+$").unwrap());

/// Builds [`Table`] values from the rows of a table run.
#[derive(Debug, Clone)]
pub struct TableAssembler {
    parse_math: bool,
}

impl TableAssembler {
    /// Create a new assembler that parses math inside cells.
    pub fn new() -> Self {
        Self { parse_math: true }
    }

    /// Enable or disable math parsing inside cells.
    pub fn with_math(mut self, parse_math: bool) -> Self {
        self.parse_math = parse_math;
        self
    }

    /// Assemble a table from raw rows.
    ///
    /// Zero surviving rows produce a table with an empty header and no body.
    pub fn assemble(&self, rows: &[&str]) -> Table {
        let mut content_rows = rows
            .iter()
            .filter(|row| {
                let separator = is_separator_row(row);
                if separator {
                    log::debug!("TableAssembler: dropping separator row {:?}", row);
                }
                !separator
            })
            .map(|row| self.build_cells(row));

        let mut table = Table::new();
        if let Some(header) = content_rows.next() {
            table.header = header;
        }
        for cells in content_rows {
            table.add_row(TableRow::new(cells));
        }

        log::debug!(
            "TableAssembler: {} input rows -> {} header cells, {} body rows",
            rows.len(),
            table.header.len(),
            table.row_count()
        );
        table
    }

    fn build_cells(&self, row: &str) -> Vec<TableCell> {
        split_row(row)
            .into_iter()
            .map(|cell| {
                if self.parse_math {
                    TableCell::from_nodes(parse_math_spans(cell))
                } else if cell.is_empty() {
                    TableCell::empty()
                } else {
                    TableCell::text(cell)
                }
            })
            .collect()
    }
}

impl Default for TableAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a row consists only of dashes, colons, pipes and whitespace.
pub fn is_separator_row(row: &str) -> bool {
    SEPARATOR_ROW.is_match(row)
}

/// Split a row on pipes into trimmed cell texts.
///
/// The empty cell before a leading pipe and after a trailing pipe is
/// dropped; empty cells in between are kept.
pub fn split_row(row: &str) -> Vec<&str> {
    let trimmed = row.trim();
    let parts: Vec<&str> = trimmed.split('|').collect();

    let start = usize::from(trimmed.starts_with('|'));
    let end = if trimmed.ends_with('|') && parts.len() > start {
        parts.len() - 1
    } else {
        parts.len()
    };

    parts[start..end.max(start)]
        .iter()
        .map(|cell| cell.trim())
        .collect()
}
