//! Integration tests for HTML and text rendering.

use std::sync::Arc;

use mathtext::render::{to_html, to_html_with_stats, MathRenderer, RenderOptions};
use mathtext::{parse, BackendError, MathMode, MathText, Typesetter};

/// Typesetter that tags its input and rejects `\error`.
fn fake_katex() -> Arc<dyn Typesetter> {
    Arc::new(
        |latex: &str, mode: MathMode| -> Result<String, BackendError> {
            if latex.contains("\\error") {
                return Err(BackendError::new("ParseError: unknown macro"));
            }
            Ok(format!("<k mode=\"{:?}\">{}</k>", mode, latex))
        },
    )
}

#[test]
fn test_paragraph_math_typeset() {
    let doc = parse("Given $a+b$:");
    let math = MathRenderer::with_typesetter(fake_katex());
    let html = to_html(&doc, &math, &RenderOptions::default()).unwrap();
    assert_eq!(
        html,
        "<div class=\"paragraph\">Given <span class=\"math-inline\"><k mode=\"Inline\">a+b</k></span>:</div>"
    );
}

#[test]
fn test_display_math_uses_block_wrapper() {
    let doc = parse("$$\\sum_i i$$");
    let math = MathRenderer::with_typesetter(fake_katex());
    let html = to_html(&doc, &math, &RenderOptions::default()).unwrap();
    assert!(html.contains("<div class=\"math-display\"><k mode=\"Display\">\\sum_i i</k></div>"));
}

#[test]
fn test_failed_span_does_not_affect_siblings() {
    let doc = parse("ok $x$ bad $\\error$ ok $y$");
    let math = MathRenderer::with_typesetter(fake_katex());
    let output = to_html_with_stats(&doc, &math, &RenderOptions::default()).unwrap();

    assert!(output.content.contains("<k mode=\"Inline\">x</k>"));
    assert!(output.content.contains(" bad \\error ok "));
    assert!(output.content.contains("<k mode=\"Inline\">y</k>"));
    assert_eq!(output.stats.math_count, 3);
    assert_eq!(output.stats.math_fallback_count, 1);
}

#[test]
fn test_text_is_escaped_but_math_markup_is_not() {
    let doc = parse("<b>bold?</b> $<$");
    let math = MathRenderer::with_typesetter(fake_katex());
    let html = to_html(&doc, &math, &RenderOptions::default()).unwrap();
    assert!(html.contains("&lt;b&gt;bold?&lt;/b&gt;"));
    assert!(html.contains("<k mode=\"Inline\"><</k>"));
}

#[test]
fn test_table_html_structure() {
    let doc = parse("| n | $n^2$ |\n|---|---|\n| 1 | 1 |\n| 2 | 4 |\n| 3 | 9 |");
    let html = to_html(&doc, &MathRenderer::new(), &RenderOptions::default()).unwrap();

    assert!(html.starts_with("<div class=\"table-wrap\"><table class=\"table\"><thead>"));
    assert!(html.contains("<th>n</th><th>n^2</th>"));
    assert_eq!(html.matches("row-even").count(), 2);
    assert_eq!(html.matches("row-odd").count(), 1);
    assert!(html.ends_with("</tbody></table></div>"));
}

#[test]
fn test_blocks_in_source_order() {
    let doc = parse("first\n\n| t |\nlast");
    let html = to_html(&doc, &MathRenderer::new(), &RenderOptions::default()).unwrap();

    let first = html.find("first").unwrap();
    let spacer = html.find("spacer").unwrap();
    let table = html.find("<table").unwrap();
    let last = html.find("last").unwrap();
    assert!(first < spacer && spacer < table && table < last);
}

#[test]
fn test_class_prefix_applies_everywhere() {
    let doc = parse("a\n\n| h |\n| v |");
    let options = RenderOptions::new().with_class_prefix("mt-");
    let html = to_html(&doc, &MathRenderer::new(), &options).unwrap();
    assert!(html.contains("class=\"mt-paragraph\""));
    assert!(html.contains("class=\"mt-spacer\""));
    assert!(html.contains("class=\"mt-table\""));
    assert!(html.contains("class=\"mt-row-even\""));
    assert!(!html.contains("class=\"paragraph\""));
}

#[test]
fn test_builder_end_to_end() {
    let result = MathText::new()
        .with_typesetter(fake_katex())
        .parse("Energy $E$\n\n$$E=mc^2$$");

    let output = result.to_html_with_stats().unwrap();
    assert_eq!(output.stats.paragraph_count, 2);
    assert_eq!(output.stats.spacer_count, 1);
    assert_eq!(output.stats.math_fallback_count, 0);

    assert_eq!(result.to_text(), "Energy $E$\n\n$$E=mc^2$$");
    assert!(result
        .to_json(mathtext::JsonFormat::Compact)
        .unwrap()
        .contains("\"mode\":\"display\""));
}
