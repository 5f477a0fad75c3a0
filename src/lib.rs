//! # mathtext
//!
//! Rendering pipeline for mixed text-and-math content.
//!
//! Raw content (prose with `$...$` / `$$...$$` math spans and markdown-style
//! pipe tables) is parsed into a [`Document`] tree and rendered to HTML with
//! the math typeset by an injected [`Typesetter`]. Typed diagram payloads
//! (netlists, chemical structures, SVG, images) are routed to backends by a
//! [`DiagramDispatcher`].
//!
//! ## Quick Start
//!
//! ```
//! use mathtext::{parse, render::{to_html, MathRenderer, RenderOptions}};
//!
//! fn main() -> mathtext::Result<()> {
//!     let doc = parse("Solve $x^2 = 4$.");
//!
//!     // No typesetter: math falls back to its LaTeX source.
//!     let html = to_html(&doc, &MathRenderer::new(), &RenderOptions::default())?;
//!     assert_eq!(html, "<div class=\"paragraph\">Solve x^2 = 4.</div>");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Never fails on content**: unbalanced delimiters and odd tables degrade
//!   to literal text
//! - **Injected capabilities**: typesetting, netlist layout and structure
//!   drawing are trait objects supplied by the host
//! - **Stale-result suppression**: diagram renders commit only while newest
//! - **Parallel processing**: uses Rayon for batches of content

pub mod capability;
pub mod diagram;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use capability::{
    BackendError, BoundingBox, Canvas, Capabilities, DrawCallback, NetlistRenderer,
    RenderedCircuit, StructureDrawer, Typesetter,
};
pub use diagram::{DiagramDispatcher, DiagramOptions, RenderHandle, RenderTarget, SmilesOptions};
pub use error::{Error, Result};
pub use model::{
    Block, DiagramPayload, DiagramType, Document, InlineNode, MathMode, Paragraph, Table,
    TableCell, TableRow,
};
pub use parser::{ContentParser, ParseOptions};
pub use render::{
    Fragment, JsonFormat, MathFallback, MathRenderer, RenderOptions, RenderOutput, RenderResult,
};

use std::sync::Arc;

/// Parse raw content into a document.
///
/// # Example
///
/// ```
/// use mathtext::parse;
///
/// let doc = parse("| a | b |\n|---|---|\n| 1 | 2 |");
/// assert_eq!(doc.tables().count(), 1);
/// ```
pub fn parse(content: &str) -> Document {
    ContentParser::new().parse(content)
}

/// Parse raw content with custom options.
///
/// # Example
///
/// ```
/// use mathtext::{parse_with_options, ParseOptions};
///
/// let doc = parse_with_options("Let $n$ be even.", ParseOptions::new().inline());
/// assert!(doc.inline);
/// ```
pub fn parse_with_options(content: &str, options: ParseOptions) -> Document {
    ContentParser::with_options(options).parse(content)
}

/// Parse content and render it to HTML.
pub fn to_html(content: &str, math: &MathRenderer) -> Result<String> {
    render::to_html(&parse(content), math, &RenderOptions::default())
}

/// Parse content and render it to plain text.
pub fn to_text(content: &str) -> String {
    render::to_text(&parse(content))
}

/// Parse content and render the document tree to JSON.
pub fn to_json(content: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&parse(content), format)
}

/// Builder for parsing and rendering mixed content.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mathtext::{BackendError, MathMode, MathText};
///
/// let html = MathText::new()
///     .with_typesetter(Arc::new(|latex: &str, _mode: MathMode| -> Result<String, BackendError> {
///         Ok(format!("<em>{}</em>", latex))
///     }))
///     .inline()
///     .parse("Let $n$ be even.")
///     .to_html()?;
///
/// assert_eq!(
///     html,
///     "<span class=\"paragraph\">Let <span class=\"math-inline\"><em>n</em></span> be even.</span>"
/// );
/// # Ok::<(), mathtext::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MathText {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    diagram_options: DiagramOptions,
    capabilities: Capabilities,
}

impl MathText {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render paragraphs as inline spans.
    pub fn inline(mut self) -> Self {
        self.parse_options = self.parse_options.inline();
        self
    }

    /// Disable table detection.
    pub fn without_tables(mut self) -> Self {
        self.parse_options = self.parse_options.without_tables();
        self
    }

    /// Disable math parsing; dollar signs stay literal.
    pub fn without_math(mut self) -> Self {
        self.parse_options = self.parse_options.without_math();
        self
    }

    /// Disable parallel batch parsing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set diagram options.
    pub fn with_diagram_options(mut self, options: DiagramOptions) -> Self {
        self.diagram_options = options;
        self
    }

    /// Provide a math typesetter.
    pub fn with_typesetter(mut self, typesetter: Arc<dyn Typesetter>) -> Self {
        self.capabilities = self.capabilities.with_typesetter(typesetter);
        self
    }

    /// Provide a netlist renderer.
    pub fn with_netlist_renderer(mut self, renderer: Arc<dyn NetlistRenderer>) -> Self {
        self.capabilities = self.capabilities.with_netlist(renderer);
        self
    }

    /// Provide a chemical structure drawer.
    pub fn with_structure_drawer(mut self, drawer: Arc<dyn StructureDrawer>) -> Self {
        self.capabilities = self.capabilities.with_structure_drawer(drawer);
        self
    }

    /// Math renderer backed by the configured typesetter.
    pub fn math_renderer(&self) -> MathRenderer {
        MathRenderer::from_capability(self.capabilities.typesetter.clone())
    }

    /// Diagram dispatcher backed by the configured capabilities.
    pub fn dispatcher(&self) -> DiagramDispatcher {
        DiagramDispatcher::with_options(self.capabilities.clone(), self.diagram_options.clone())
    }

    /// Parse content and return a result wrapper.
    pub fn parse(&self, content: &str) -> MathTextResult {
        MathTextResult {
            document: ContentParser::with_options(self.parse_options.clone()).parse(content),
            math: self.math_renderer(),
            render_options: self.render_options.clone(),
        }
    }

    /// Parse a batch of content, in parallel unless configured sequential.
    pub fn parse_all<S>(&self, contents: &[S]) -> Vec<MathTextResult>
    where
        S: AsRef<str> + Sync,
    {
        let math = self.math_renderer();
        ContentParser::with_options(self.parse_options.clone())
            .parse_all(contents)
            .into_iter()
            .map(|document| MathTextResult {
                document,
                math: math.clone(),
                render_options: self.render_options.clone(),
            })
            .collect()
    }
}

/// Result of parsing content with [`MathText`].
#[derive(Debug, Clone)]
pub struct MathTextResult {
    /// The parsed document
    pub document: Document,
    math: MathRenderer,
    render_options: RenderOptions,
}

impl MathTextResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.math, &self.render_options)
    }

    /// Convert to HTML with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderOutput> {
        render::to_html_with_stats(&self.document, &self.math, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
