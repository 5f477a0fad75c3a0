//! HTML rendering for mixed-content documents.

use crate::error::Result;
use crate::model::{Block, Document, InlineNode, MathMode, Paragraph, Table, TableCell};

use super::visitor::{DocumentVisitor, VisitorAction};
use super::{
    Fragment, MathFallback, MathRenderer, RenderOptions, RenderOutput, RenderResult, RenderStats,
};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, math: &MathRenderer, options: &RenderOptions) -> Result<String> {
    HtmlRenderer::new(math, options.clone()).render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(
    doc: &Document,
    math: &MathRenderer,
    options: &RenderOptions,
) -> Result<RenderOutput> {
    HtmlRenderer::new(math, options.clone()).render_with_stats(doc)
}

/// Render a single fragment to HTML with default class names.
pub fn fragment_to_html(fragment: &Fragment) -> String {
    render_fragment(fragment, &RenderOptions::default())
}

/// HTML renderer.
///
/// Paragraphs become `div` elements, or `span` elements when the document
/// is inline. Math spans go through the [`MathRenderer`]; spans it cannot
/// typeset are shown as literal source.
pub struct HtmlRenderer<'a> {
    math: &'a MathRenderer,
    options: RenderOptions,
    stats: RenderStats,
    visitor: Option<Box<dyn DocumentVisitor>>,
}

impl<'a> HtmlRenderer<'a> {
    /// Create a new HTML renderer.
    pub fn new(math: &'a MathRenderer, options: RenderOptions) -> Self {
        Self {
            math,
            options,
            stats: RenderStats::new(),
            visitor: None,
        }
    }

    /// Attach a visitor that can replace or skip elements.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderOutput> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;
        Ok(RenderOutput::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let separator = if doc.inline { "" } else { "\n" };
        let mut output = String::new();

        for block in &doc.blocks {
            let mut rendered = String::new();
            self.render_block(&mut rendered, block, doc.inline);
            if rendered.is_empty() {
                continue;
            }
            if !output.is_empty() {
                output.push_str(separator);
            }
            output.push_str(&rendered);
        }

        log::debug!(
            "HtmlRenderer: {} blocks -> {} bytes",
            doc.block_count(),
            output.len()
        );
        Ok(output)
    }

    fn visit(
        &mut self,
        visit: impl FnOnce(&mut Box<dyn DocumentVisitor>) -> VisitorAction,
    ) -> VisitorAction {
        match self.visitor.as_mut() {
            Some(visitor) => visit(visitor),
            None => VisitorAction::Continue,
        }
    }

    fn render_block(&mut self, output: &mut String, block: &Block, inline: bool) {
        match block {
            Block::Paragraph(p) => match self.visit(|v| v.visit_paragraph(p)) {
                VisitorAction::Skip => {}
                VisitorAction::Replace(s) => output.push_str(&s),
                VisitorAction::Continue => self.render_paragraph(output, p, inline),
            },
            Block::Table(t) => match self.visit(|v| v.visit_table(t)) {
                VisitorAction::Skip => {}
                VisitorAction::Replace(s) => output.push_str(&s),
                VisitorAction::Continue => self.render_table(output, t),
            },
            Block::Spacer => match self.visit(|v| v.visit_spacer()) {
                VisitorAction::Skip => {}
                VisitorAction::Replace(s) => output.push_str(&s),
                VisitorAction::Continue => {
                    if self.options.collect_stats {
                        self.stats.add_spacer();
                    }
                    output.push_str(&format!(
                        "<div class=\"{}\"></div>",
                        self.options.class("spacer")
                    ));
                }
            },
        }
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph, inline: bool) {
        if self.options.collect_stats {
            self.stats.add_paragraph();
        }
        let tag = if inline { "span" } else { "div" };
        output.push_str(&format!(
            "<{} class=\"{}\">",
            tag,
            self.options.class("paragraph")
        ));
        self.render_inline_content(output, &para.content);
        output.push_str(&format!("</{}>", tag));
    }

    fn render_inline_content(&mut self, output: &mut String, content: &[InlineNode]) {
        for node in content {
            match node {
                InlineNode::Text { text } => {
                    if self.options.collect_stats {
                        self.stats.count_text(text);
                    }
                    output.push_str(&escape_html(text));
                }
                InlineNode::Math { latex, mode } => self.render_math(output, latex, *mode),
            }
        }
    }

    fn render_math(&mut self, output: &mut String, latex: &str, mode: MathMode) {
        match self.visit(|v| v.visit_math(latex, mode)) {
            VisitorAction::Skip => return,
            VisitorAction::Replace(s) => {
                output.push_str(&s);
                return;
            }
            VisitorAction::Continue => {}
        }

        let result = self.math.render(latex, mode);
        if self.options.collect_stats {
            self.stats.add_math(result.is_failure());
        }
        match result {
            RenderResult::Success(fragment) => {
                output.push_str(&render_fragment(&fragment, &self.options));
            }
            RenderResult::Failure { .. } => match self.options.math_fallback {
                MathFallback::Source => output.push_str(&escape_html(latex)),
                MathFallback::Delimited => {
                    let delim = mode.delimiter();
                    output.push_str(delim);
                    output.push_str(&escape_html(latex));
                    output.push_str(delim);
                }
            },
        }
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }
        if self.options.collect_stats {
            self.stats.add_table(table.row_count());
        }

        output.push_str(&format!(
            "<div class=\"{}\"><table class=\"{}\">",
            self.options.class("table-wrap"),
            self.options.class("table")
        ));

        if !table.header.is_empty() {
            output.push_str("<thead><tr>");
            for cell in &table.header {
                self.render_cell(output, cell, "th");
            }
            output.push_str("</tr></thead>");
        }

        output.push_str("<tbody>");
        for (i, row) in table.rows.iter().enumerate() {
            if self.options.row_striping {
                let parity = if i % 2 == 0 { "row-even" } else { "row-odd" };
                output.push_str(&format!("<tr class=\"{}\">", self.options.class(parity)));
            } else {
                output.push_str("<tr>");
            }
            for cell in &row.cells {
                self.render_cell(output, cell, "td");
            }
            output.push_str("</tr>");
        }
        output.push_str("</tbody></table></div>");
    }

    fn render_cell(&mut self, output: &mut String, cell: &TableCell, tag: &str) {
        output.push_str(&format!("<{}>", tag));
        self.render_inline_content(output, &cell.content.content);
        output.push_str(&format!("</{}>", tag));
    }
}

fn render_fragment(fragment: &Fragment, options: &RenderOptions) -> String {
    match fragment {
        Fragment::Text { text } => escape_html(text),
        Fragment::Math { html, mode } => match mode {
            MathMode::Display => format!(
                "<div class=\"{}\">{}</div>",
                options.class("math-display"),
                html
            ),
            MathMode::Inline => format!(
                "<span class=\"{}\">{}</span>",
                options.class("math-inline"),
                html
            ),
        },
        Fragment::Svg { markup, .. } => {
            format!("<div class=\"{}\">{}</div>", options.class("diagram"), markup)
        }
        Fragment::Canvas {
            width,
            height,
            data,
            layout,
        } => format!(
            "<img class=\"{}\" src=\"{}\" width=\"{}\" height=\"{}\" style=\"{}\" alt=\"\">",
            options.class("diagram-canvas"),
            escape_html(data),
            width,
            height,
            layout.to_css()
        ),
        Fragment::Image { src, alt, layout } => format!(
            "<img class=\"{}\" src=\"{}\" alt=\"{}\" style=\"{}\">",
            options.class("diagram-image"),
            escape_html(src),
            escape_html(alt),
            layout.to_css()
        ),
        Fragment::ErrorBox { message } => format!(
            "<div class=\"{}\">{}</div>",
            options.class("diagram-error"),
            escape_html(message)
        ),
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
