//! Integration tests for the visitor pattern.

use mathtext::model::{MathMode, Paragraph, Table};
use mathtext::parse;
use mathtext::render::visitor::{
    CompositeVisitor, DefaultVisitor, DocumentVisitor, MathSourceVisitor, SkipSpacersVisitor,
    VisitorAction,
};
use mathtext::render::{HtmlRenderer, MathRenderer, RenderOptions};

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    paragraph_count: usize,
    table_count: usize,
    math_count: usize,
    spacer_count: usize,
}

impl DocumentVisitor for CountingVisitor {
    fn visit_paragraph(&mut self, _para: &Paragraph) -> VisitorAction {
        self.paragraph_count += 1;
        VisitorAction::Continue
    }

    fn visit_table(&mut self, _table: &Table) -> VisitorAction {
        self.table_count += 1;
        VisitorAction::Continue
    }

    fn visit_math(&mut self, _latex: &str, _mode: MathMode) -> VisitorAction {
        self.math_count += 1;
        VisitorAction::Continue
    }

    fn visit_spacer(&mut self) -> VisitorAction {
        self.spacer_count += 1;
        VisitorAction::Continue
    }
}

/// Visitor that hides tables behind a placeholder.
struct TablePlaceholder;

impl DocumentVisitor for TablePlaceholder {
    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        VisitorAction::Replace(format!("<p>[table: {} rows]</p>", table.row_count()))
    }
}

fn render_with<V: DocumentVisitor + 'static>(content: &str, visitor: V) -> String {
    let math = MathRenderer::new();
    HtmlRenderer::new(&math, RenderOptions::default())
        .with_visitor(visitor)
        .render(&parse(content))
        .unwrap()
}

#[test]
fn test_default_visitor_all_continue() {
    let mut visitor = DefaultVisitor::new();
    assert_eq!(
        visitor.visit_paragraph(&Paragraph::new()),
        VisitorAction::Continue
    );
    assert_eq!(visitor.visit_table(&Table::new()), VisitorAction::Continue);
    assert_eq!(
        visitor.visit_math("x", MathMode::Inline),
        VisitorAction::Continue
    );
    assert_eq!(visitor.visit_spacer(), VisitorAction::Continue);
}

#[test]
fn test_default_visitor_matches_plain_render() {
    let content = "a $b$\n\n| c |\n| d |";
    let math = MathRenderer::new();
    let plain = mathtext::render::to_html(&parse(content), &math, &RenderOptions::default())
        .unwrap();
    assert_eq!(render_with(content, DefaultVisitor), plain);
}

#[test]
fn test_skip_spacers() {
    let html = render_with("a\n\n\nb", SkipSpacersVisitor);
    assert!(!html.contains("spacer"));
    assert_eq!(html.matches("class=\"paragraph\"").count(), 2);
}

#[test]
fn test_table_replacement() {
    let html = render_with("intro\n| h |\n|---|\n| 1 |\n| 2 |", TablePlaceholder);
    assert!(html.contains("<p>[table: 2 rows]</p>"));
    assert!(!html.contains("<table"));
}

#[test]
fn test_math_source_visitor_bypasses_typesetter() {
    let html = render_with("Let $a<b$ hold", MathSourceVisitor);
    assert!(html.contains("Let <code>$a&lt;b$</code> hold"));
}

#[test]
fn test_composite_visitor_chaining() {
    let mut composite = CompositeVisitor::new()
        .with_visitor(SkipSpacersVisitor)
        .with_visitor(MathSourceVisitor)
        .with_visitor(DefaultVisitor);

    assert!(composite.visit_spacer().should_skip());
    assert!(composite.visit_math("x", MathMode::Display).is_replace());
    assert_eq!(
        composite.visit_table(&Table::new()),
        VisitorAction::Continue
    );
}

#[test]
fn test_visitor_action_methods() {
    let replace = VisitorAction::Replace("custom".into());
    assert!(replace.is_replace());
    assert!(!replace.should_skip());
    assert_eq!(replace.replacement(), Some("custom"));

    let skip = VisitorAction::Skip;
    assert!(skip.should_skip());
    assert!(skip.replacement().is_none());
}

#[test]
fn test_counting_visitor() {
    let mut visitor = CountingVisitor::default();
    let doc = parse("one $x$ and $$y$$\n\n| $z$ |\n| w |");

    for para in doc.paragraphs() {
        visitor.visit_paragraph(para);
        for (latex, mode) in para.math_nodes() {
            visitor.visit_math(latex, mode);
        }
    }
    for table in doc.tables() {
        visitor.visit_table(table);
    }
    visitor.visit_spacer();

    assert_eq!(visitor.paragraph_count, 1);
    assert_eq!(visitor.math_count, 2);
    assert_eq!(visitor.table_count, 1);
    assert_eq!(visitor.spacer_count, 1);
}
