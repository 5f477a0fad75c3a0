//! Paragraph and inline-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of inline content: text runs interleaved with math spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline nodes in source order
    pub content: Vec<InlineNode>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    /// Create a paragraph from already-parsed inline nodes.
    pub fn from_nodes(content: Vec<InlineNode>) -> Self {
        Self { content }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineNode::text(text));
    }

    /// Add a math span.
    pub fn add_math(&mut self, latex: impl Into<String>, mode: MathMode) {
        self.content.push(InlineNode::math(latex, mode));
    }

    /// Get plain text content, with math written back in its delimiters.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(InlineNode::source_text).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Iterate over the math spans of this paragraph.
    pub fn math_nodes(&self) -> impl Iterator<Item = (&str, MathMode)> {
        self.content.iter().filter_map(|node| match node {
            InlineNode::Math { latex, mode } => Some((latex.as_str(), *mode)),
            InlineNode::Text { .. } => None,
        })
    }

    /// Check if the paragraph contains any math.
    pub fn has_math(&self) -> bool {
        self.math_nodes().next().is_some()
    }
}

/// Inline content within a paragraph or table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    /// Literal text
    Text {
        /// The text content
        text: String,
    },

    /// A math span taken from balanced `$...$` or `$$...$$` delimiters
    Math {
        /// LaTeX source without delimiters
        latex: String,
        /// Inline or display placement
        mode: MathMode,
    },
}

impl InlineNode {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text { text: text.into() }
    }

    /// Create a math node.
    pub fn math(latex: impl Into<String>, mode: MathMode) -> Self {
        InlineNode::Math {
            latex: latex.into(),
            mode,
        }
    }

    /// Check if this node is a math span.
    pub fn is_math(&self) -> bool {
        matches!(self, InlineNode::Math { .. })
    }

    /// Get the text of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InlineNode::Text { text } => Some(text),
            InlineNode::Math { .. } => None,
        }
    }

    /// Reconstruct the source text of this node.
    pub fn source_text(&self) -> String {
        match self {
            InlineNode::Text { text } => text.clone(),
            InlineNode::Math { latex, mode } => {
                let delim = mode.delimiter();
                format!("{}{}{}", delim, latex, delim)
            }
        }
    }
}

/// Placement of a math span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathMode {
    /// `$...$`, typeset within the line
    #[default]
    Inline,
    /// `$$...$$`, typeset on its own line
    Display,
}

impl MathMode {
    /// The delimiter that opens and closes a span in this mode.
    pub fn delimiter(self) -> &'static str {
        match self {
            MathMode::Inline => "$",
            MathMode::Display => "$$",
        }
    }

    /// Check if this is display mode.
    pub fn is_display(self) -> bool {
        self == MathMode::Display
    }
}
