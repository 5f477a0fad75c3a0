//! Document model types for mixed-content representation.
//!
//! This module defines the immutable output of the content parser: blocks
//! of paragraphs, tables and spacers built from text and math inline nodes,
//! plus the typed diagram payloads consumed by the diagram dispatcher.

mod diagram;
mod document;
mod paragraph;
mod table;

pub use diagram::{DiagramPayload, DiagramType};
pub use document::{Block, Document};
pub use paragraph::{InlineNode, MathMode, Paragraph};
pub use table::{Table, TableCell, TableRow};
