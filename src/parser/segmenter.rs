//! Line segmentation into prose, blank lines and table runs.
//!
//! The segmenter is a two-state machine over the lines of the input. Lines
//! that look like table rows are buffered while in the table-run state;
//! the buffer is flushed as one [`Segment::Table`] as soon as a non-table
//! line (or the end of input) is reached.

use std::str::Lines;

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only line
    Blank,
    /// Ordinary text line
    Prose,
    /// Pipe-delimited table row (including separator rows)
    TableRow,
}

/// Classify one line.
///
/// A line is a table row if its trimmed form starts with `|`, or if it
/// contains at least two pipes. A single bare pipe is prose.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('|') || trimmed.matches('|').count() >= 2 {
        LineKind::TableRow
    } else {
        LineKind::Prose
    }
}

/// A unit of segmented input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A prose line, untrimmed
    Prose(&'a str),
    /// A blank line outside a table run
    Blank,
    /// A run of consecutive table rows, each trimmed
    Table(Vec<&'a str>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    Prose,
    TableRun,
}

/// Iterator yielding [`Segment`]s from raw content.
pub struct Segmenter<'a> {
    lines: Lines<'a>,
    state: SegmentState,
    buffer: Vec<&'a str>,
    pending: Option<Segment<'a>>,
    detect_tables: bool,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over the given content.
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            state: SegmentState::Prose,
            buffer: Vec::new(),
            pending: None,
            detect_tables: true,
        }
    }

    /// Enable or disable table detection. When disabled every non-blank
    /// line is prose.
    pub fn with_tables(mut self, detect: bool) -> Self {
        self.detect_tables = detect;
        self
    }

    fn classify(&self, line: &str) -> LineKind {
        match classify_line(line) {
            LineKind::TableRow if !self.detect_tables => LineKind::Prose,
            kind => kind,
        }
    }

    fn flush(&mut self) -> Segment<'a> {
        self.state = SegmentState::Prose;
        let rows = std::mem::take(&mut self.buffer);
        log::debug!("Segmenter: flushing table run of {} rows", rows.len());
        Segment::Table(rows)
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        while let Some(line) = self.lines.next() {
            let segment = match self.classify(line) {
                LineKind::TableRow => {
                    self.state = SegmentState::TableRun;
                    self.buffer.push(line.trim());
                    continue;
                }
                LineKind::Blank => Segment::Blank,
                LineKind::Prose => Segment::Prose(line),
            };

            if self.state == SegmentState::TableRun {
                self.pending = Some(segment);
                return Some(self.flush());
            }
            return Some(segment);
        }

        if self.state == SegmentState::TableRun {
            return Some(self.flush());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
        assert_eq!(classify_line("| A |"), LineKind::TableRow);
        assert_eq!(classify_line("  |A"), LineKind::TableRow);
        assert_eq!(classify_line("a | b | c"), LineKind::TableRow);
        assert_eq!(classify_line("either a | b"), LineKind::Prose);
        assert_eq!(classify_line("plain"), LineKind::Prose);
    }

    #[test]
    fn test_segments_in_order() {
        let content = "intro\n| A | B |\n|---|---|\n| 1 | 2 |\n\noutro";
        let segments: Vec<_> = Segmenter::new(content).collect();
        assert_eq!(
            segments,
            vec![
                Segment::Prose("intro"),
                Segment::Table(vec!["| A | B |", "|---|---|", "| 1 | 2 |"]),
                Segment::Blank,
                Segment::Prose("outro"),
            ]
        );
    }

    #[test]
    fn test_table_at_end_is_flushed() {
        let segments: Vec<_> = Segmenter::new("text\n  | x |  ").collect();
        assert_eq!(
            segments,
            vec![Segment::Prose("text"), Segment::Table(vec!["| x |"])]
        );
    }

    #[test]
    fn test_adjacent_tables_split_by_blank() {
        let segments: Vec<_> = Segmenter::new("|a|\n\n|b|").collect();
        assert_eq!(
            segments,
            vec![
                Segment::Table(vec!["|a|"]),
                Segment::Blank,
                Segment::Table(vec!["|b|"]),
            ]
        );
    }

    #[test]
    fn test_tables_disabled() {
        let segments: Vec<_> = Segmenter::new("| A |").with_tables(false).collect();
        assert_eq!(segments, vec![Segment::Prose("| A |")]);
    }
}
