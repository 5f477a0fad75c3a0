//! Error types for mathtext library.

use thiserror::Error;

/// Result type alias for mathtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering content or diagrams.
///
/// Errors never escape the rendering pipeline as panics. Diagram and math
/// failures are carried inside [`crate::render::RenderResult::Failure`] so the
/// rest of a document keeps rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Diagram data could not be parsed (e.g. malformed netlist JSON).
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required rendering capability was not provided.
    #[error("{0} library not loaded")]
    CapabilityUnavailable(String),

    /// The backend was present but rejected the input.
    #[error("Backend render error: {0}")]
    BackendRender(String),

    /// Diagram data does not match the shape required by its type.
    #[error("{0}")]
    InvalidPayload(String),

    /// The diagram type name is not one of NETLIST, SMILES, SVG, IMAGE.
    #[error("Unknown diagram type: {0}")]
    UnknownDiagramType(String),

    /// A newer render was issued for the same target before this one resolved.
    #[error("Render superseded by a newer request")]
    Superseded,

    /// Error during output rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Check if this error means a capability was missing.
    pub fn is_capability_missing(&self) -> bool {
        matches!(self, Error::CapabilityUnavailable(_))
    }

    /// Check if this error reports a stale, discarded render.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Error::Superseded)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Syntax | Category::Eof => Error::Parse(err.to_string()),
            Category::Data => Error::InvalidPayload(err.to_string()),
            Category::Io => Error::Render(err.to_string()),
        }
    }
}
