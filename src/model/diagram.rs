//! Diagram payload types.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of diagram carried by a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiagramType {
    /// Gate-level circuit described as JSON netlist
    Netlist,
    /// Chemical structure in SMILES line notation
    Smiles,
    /// Raw SVG markup, possibly wrapped in a fenced block
    Svg,
    /// Opaque image reference (URL or data URI)
    Image,
}

impl DiagramType {
    /// All diagram types.
    pub const ALL: [DiagramType; 4] = [
        DiagramType::Netlist,
        DiagramType::Smiles,
        DiagramType::Svg,
        DiagramType::Image,
    ];

    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramType::Netlist => "NETLIST",
            DiagramType::Smiles => "SMILES",
            DiagramType::Svg => "SVG",
            DiagramType::Image => "IMAGE",
        }
    }

    /// Check if rendering this type completes asynchronously.
    pub fn is_async(self) -> bool {
        self == DiagramType::Smiles
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        DiagramType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownDiagramType(name.to_string()))
    }
}

/// A typed diagram payload supplied by the content source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagramPayload {
    /// Diagram type
    #[serde(rename = "type")]
    pub kind: DiagramType,

    /// Type-dependent data (netlist JSON, SMILES, SVG markup, image reference)
    pub data: String,
}

impl DiagramPayload {
    /// Create a new payload.
    pub fn new(kind: DiagramType, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    /// Create a payload from a type name such as `"SVG"`.
    pub fn parse(kind: &str, data: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(kind.parse()?, data))
    }

    /// Create a netlist payload.
    pub fn netlist(data: impl Into<String>) -> Self {
        Self::new(DiagramType::Netlist, data)
    }

    /// Create a SMILES payload.
    pub fn smiles(data: impl Into<String>) -> Self {
        Self::new(DiagramType::Smiles, data)
    }

    /// Create an SVG payload.
    pub fn svg(data: impl Into<String>) -> Self {
        Self::new(DiagramType::Svg, data)
    }

    /// Create an image payload.
    pub fn image(data: impl Into<String>) -> Self {
        Self::new(DiagramType::Image, data)
    }

    /// Check if the data is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.data.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_str() {
        assert_eq!("SVG".parse::<DiagramType>().unwrap(), DiagramType::Svg);
        assert_eq!(" smiles ".parse::<DiagramType>().unwrap(), DiagramType::Smiles);
        assert!(matches!(
            "GRAPH".parse::<DiagramType>(),
            Err(Error::UnknownDiagramType(_))
        ));
    }

    #[test]
    fn test_payload_json_shape() {
        let payload: DiagramPayload =
            serde_json::from_str(r#"{"type": "NETLIST", "data": "{}"}"#).unwrap();
        assert_eq!(payload.kind, DiagramType::Netlist);
        assert_eq!(payload.data, "{}");

        let json = serde_json::to_string(&DiagramPayload::image("a.png")).unwrap();
        assert_eq!(json, r#"{"type":"IMAGE","data":"a.png"}"#);
    }

    #[test]
    fn test_payload_blank() {
        assert!(DiagramPayload::svg("  \n").is_blank());
        assert!(!DiagramPayload::svg("<svg></svg>").is_blank());
        assert!(DiagramType::Smiles.is_async());
        assert!(!DiagramType::Svg.is_async());
    }
}
