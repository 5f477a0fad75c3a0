//! Render outcomes and rendering statistics.

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::Fragment;

/// Outcome of rendering one math span or diagram.
///
/// Failures are values, not panics: a failed span still has something to
/// show, either its fallback or an error box.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    /// Rendering succeeded
    Success(Fragment),
    /// Rendering failed
    Failure {
        /// Why it failed
        error: Error,
        /// What to show instead, if anything better than an error box
        fallback: Option<Fragment>,
    },
}

impl RenderResult {
    /// Create a failure without fallback.
    pub fn failure(error: Error) -> Self {
        RenderResult::Failure {
            error,
            fallback: None,
        }
    }

    /// Create a failure with a fallback fragment.
    pub fn failure_with_fallback(error: Error, fallback: Fragment) -> Self {
        RenderResult::Failure {
            error,
            fallback: Some(fallback),
        }
    }

    /// Check if rendering succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, RenderResult::Success(_))
    }

    /// Check if rendering failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Get the rendered fragment on success.
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            RenderResult::Success(fragment) => Some(fragment),
            RenderResult::Failure { .. } => None,
        }
    }

    /// Get the error on failure.
    pub fn error(&self) -> Option<&Error> {
        match self {
            RenderResult::Success(_) => None,
            RenderResult::Failure { error, .. } => Some(error),
        }
    }

    /// Fragment to display: the rendered one, the fallback, or an error
    /// box whose message is cut to `message_limit` characters.
    pub fn display_fragment(&self, message_limit: usize) -> Fragment {
        match self {
            RenderResult::Success(fragment) => fragment.clone(),
            RenderResult::Failure {
                fallback: Some(fallback),
                ..
            } => fallback.clone(),
            RenderResult::Failure { error, .. } => {
                Fragment::error_box(&error.to_string(), message_limit)
            }
        }
    }
}

impl From<Fragment> for RenderResult {
    fn from(fragment: Fragment) -> Self {
        RenderResult::Success(fragment)
    }
}

/// Result of rendering a whole document, with statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// The rendered content
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderOutput {
    /// Create a new render output.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of table body rows rendered
    pub row_count: u32,

    /// Number of spacers rendered
    pub spacer_count: u32,

    /// Number of math spans encountered
    pub math_count: u32,

    /// Number of math spans shown as literal fallback text
    pub math_fallback_count: u32,

    /// Approximate word count of the text content
    pub word_count: u32,

    /// Character count of the text content (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment table count and add its body rows.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.row_count += rows as u32;
    }

    /// Increment spacer count.
    pub fn add_spacer(&mut self) {
        self.spacer_count += 1;
    }

    /// Record one math span and whether it fell back to literal text.
    pub fn add_math(&mut self, fell_back: bool) {
        self.math_count += 1;
        if fell_back {
            self.math_fallback_count += 1;
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
