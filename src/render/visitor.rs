//! Visitor pattern for customizing document rendering.
//!
//! The visitor pattern allows users to customize how different document
//! elements are rendered without modifying the core rendering logic.
//!
//! # Example
//!
//! ```
//! use mathtext::render::visitor::{DocumentVisitor, VisitorAction};
//! use mathtext::model::Table;
//!
//! struct HideTables;
//!
//! impl DocumentVisitor for HideTables {
//!     fn visit_table(&mut self, _table: &Table) -> VisitorAction {
//!         VisitorAction::Replace("<!-- table omitted -->".to_string())
//!     }
//! }
//! ```

use crate::model::{MathMode, Paragraph, Table};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom output, inserted verbatim.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting document elements during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor: Send + Sync {
    /// Called before rendering a paragraph.
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        let _ = para;
        VisitorAction::Continue
    }

    /// Called before rendering a table.
    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        let _ = table;
        VisitorAction::Continue
    }

    /// Called before typesetting a math span.
    ///
    /// # Arguments
    /// * `latex` - The LaTeX source without delimiters
    /// * `mode` - Inline or display
    fn visit_math(&mut self, latex: &str, mode: MathMode) -> VisitorAction {
        let _ = (latex, mode);
        VisitorAction::Continue
    }

    /// Called before rendering a spacer.
    fn visit_spacer(&mut self) -> VisitorAction {
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops spacer blocks.
#[derive(Debug, Clone, Default)]
pub struct SkipSpacersVisitor;

impl DocumentVisitor for SkipSpacersVisitor {
    fn visit_spacer(&mut self) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that shows math as escaped LaTeX source in a `<code>` element
/// instead of typesetting it.
#[derive(Debug, Clone, Default)]
pub struct MathSourceVisitor;

impl DocumentVisitor for MathSourceVisitor {
    fn visit_math(&mut self, latex: &str, mode: MathMode) -> VisitorAction {
        let delim = mode.delimiter();
        VisitorAction::Replace(format!(
            "<code>{}{}{}</code>",
            delim,
            super::html::escape_html(latex),
            delim
        ))
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut Box<dyn DocumentVisitor>) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor);
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(para))
    }

    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        self.first_action(|v| v.visit_table(table))
    }

    fn visit_math(&mut self, latex: &str, mode: MathMode) -> VisitorAction {
        self.first_action(|v| v.visit_math(latex, mode))
    }

    fn visit_spacer(&mut self) -> VisitorAction {
        self.first_action(|v| v.visit_spacer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_action_default() {
        assert_eq!(VisitorAction::default(), VisitorAction::Continue);
    }

    #[test]
    fn test_visitor_action_should_skip() {
        assert!(!VisitorAction::Continue.should_skip());
        assert!(!VisitorAction::Replace("test".into()).should_skip());
        assert!(VisitorAction::Skip.should_skip());
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.replacement().is_none());
        assert_eq!(
            VisitorAction::Replace("hello".into()).replacement(),
            Some("hello")
        );
    }

    #[test]
    fn test_math_source_visitor_escapes() {
        let mut visitor = MathSourceVisitor;
        let action = visitor.visit_math("a<b", MathMode::Display);
        assert_eq!(action.replacement(), Some("<code>$$a&lt;b$$</code>"));
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(SkipSpacersVisitor)
            .with_visitor(DefaultVisitor);

        assert!(composite.visit_spacer().should_skip());
        assert_eq!(
            composite.visit_paragraph(&Paragraph::new()),
            VisitorAction::Continue
        );
        assert_eq!(
            composite.visit_math("x", MathMode::Inline),
            VisitorAction::Continue
        );
    }
}
