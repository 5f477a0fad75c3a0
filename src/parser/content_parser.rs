//! Mixed-content parser: raw text to [`Document`].

use rayon::prelude::*;

use crate::model::{Document, InlineNode, Paragraph};

use super::math_span::parse_math_spans;
use super::segmenter::{Segment, Segmenter};
use super::table_assembler::TableAssembler;
use super::ParseOptions;

/// Parser turning raw content into a document tree.
///
/// Parsing never fails: unbalanced delimiters and odd table shapes degrade
/// to literal text.
///
/// # Example
///
/// ```
/// use mathtext::{ContentParser, model::Block};
///
/// let doc = ContentParser::new().parse("Solve $x^2 = 4$.\n\n| x | y |\n|---|---|\n| 2 | 4 |");
/// assert_eq!(doc.block_count(), 3);
/// assert!(matches!(doc.blocks[2], Block::Table(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentParser {
    options: ParseOptions,
}

impl ContentParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse one piece of raw content.
    pub fn parse(&self, content: &str) -> Document {
        let assembler = TableAssembler::new().with_math(self.options.parse_math);
        let mut doc = Document::new();
        doc.inline = self.options.inline;

        for segment in Segmenter::new(content).with_tables(self.options.detect_tables) {
            match segment {
                Segment::Prose(line) => doc.add_paragraph(self.parse_line(line)),
                Segment::Blank => doc.add_spacer(),
                Segment::Table(rows) => doc.add_table(assembler.assemble(&rows)),
            }
        }

        log::debug!(
            "ContentParser: {} bytes -> {} blocks",
            content.len(),
            doc.block_count()
        );
        doc
    }

    /// Parse many pieces of content, preserving input order.
    ///
    /// Uses Rayon unless the options request sequential processing.
    pub fn parse_all<S>(&self, contents: &[S]) -> Vec<Document>
    where
        S: AsRef<str> + Sync,
    {
        if self.options.parallel {
            contents.par_iter().map(|c| self.parse(c.as_ref())).collect()
        } else {
            contents.iter().map(|c| self.parse(c.as_ref())).collect()
        }
    }

    /// Parse a single prose line into a paragraph.
    pub fn parse_line(&self, line: &str) -> Paragraph {
        if self.options.parse_math {
            Paragraph::from_nodes(parse_math_spans(line))
        } else if line.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::from_nodes(vec![InlineNode::text(line)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, MathMode};

    #[test]
    fn test_parse_empty() {
        assert!(ContentParser::new().parse("").is_empty());
    }

    #[test]
    fn test_parse_blocks() {
        let doc = ContentParser::new().parse("a $x$\n\n| h |\nb");
        assert_eq!(doc.block_count(), 4);
        assert!(doc.blocks[0].is_paragraph());
        assert!(doc.blocks[1].is_spacer());
        assert!(doc.blocks[2].is_table());
        assert!(doc.blocks[3].is_paragraph());
    }

    #[test]
    fn test_inline_flag() {
        let parser = ContentParser::with_options(ParseOptions::new().inline());
        assert!(parser.parse("x").inline);
    }

    #[test]
    fn test_without_math() {
        let parser = ContentParser::with_options(ParseOptions::new().without_math());
        let doc = parser.parse("$x$");
        match &doc.blocks[0] {
            Block::Paragraph(p) => assert_eq!(p.content, vec![InlineNode::text("$x$")]),
            other => panic!("Expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_display() {
        let p = ContentParser::new().parse_line("$$E=mc^2$$");
        assert_eq!(p.content, vec![InlineNode::math("E=mc^2", MathMode::Display)]);
    }

    #[test]
    fn test_parse_all_preserves_order() {
        let inputs = ["one", "two", "three", "four"];
        let parallel = ContentParser::new().parse_all(&inputs);
        let sequential =
            ContentParser::with_options(ParseOptions::new().sequential()).parse_all(&inputs);

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[2].plain_text(), "three");
    }
}
