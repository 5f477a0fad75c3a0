//! JSON rendering of the document tree.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MathMode, Paragraph};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        let mut para = Paragraph::with_text("Energy: ");
        para.add_math("E=mc^2", MathMode::Display);
        doc.add_paragraph(para);

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"latex\": \"E=mc^2\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact_round_trip() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("x"));
        doc.add_spacer();

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
