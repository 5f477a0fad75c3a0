//! Plain text rendering.

use crate::model::Document;

/// Convert a document to plain text.
///
/// Math spans keep their original delimiters, table rows become
/// tab-separated lines and spacers become empty lines.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim().to_string()
}
