//! Rendering module: math typesetting, fragments and document output formats.

mod fragment;
mod html;
mod json;
mod math;
mod options;
mod result;
mod text;
pub mod visitor;

pub use fragment::{Fragment, Layout, ViewBox, WidthPolicy};
pub use html::{escape_html, fragment_to_html, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use math::MathRenderer;
pub use options::{MathFallback, RenderOptions};
pub use result::{RenderOutput, RenderResult, RenderStats};
pub use text::to_text;
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
