//! Rendering capabilities injected by the host.
//!
//! Typesetting, netlist layout and chemical-structure drawing are external
//! services this crate depends on but does not implement. Each one is
//! passed in explicitly and may be absent; absence is checked before every
//! use and turned into a [`Error::CapabilityUnavailable`] failure.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use thiserror::Error;

use crate::diagram::{Netlist, SmilesOptions};
use crate::error::Error;
use crate::model::MathMode;

/// Error reported by a capability that rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    /// Create a backend error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Converts LaTeX into a markup fragment (e.g. KaTeX HTML).
pub trait Typesetter: Send + Sync {
    /// Typeset one expression. `mode` only affects layout, not parsing.
    fn typeset(&self, latex: &str, mode: MathMode) -> Result<String, BackendError>;
}

impl<F> Typesetter for F
where
    F: Fn(&str, MathMode) -> Result<String, BackendError> + Send + Sync,
{
    fn typeset(&self, latex: &str, mode: MathMode) -> Result<String, BackendError> {
        self(latex, mode)
    }
}

/// Axis-aligned bounding box of a rendered drawing, in user units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl BoundingBox {
    /// Create a bounding box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow the box by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }
}

/// Output of a netlist renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCircuit {
    /// SVG markup of the circuit
    pub svg: String,
    /// Extent of the drawn circuit
    pub bbox: BoundingBox,
}

/// Lays out a gate-level netlist as SVG.
pub trait NetlistRenderer: Send + Sync {
    /// Render the netlist and report the drawing's bounding box.
    fn render(&self, netlist: &Netlist) -> Result<RenderedCircuit, BackendError>;
}

/// Raster output of a structure drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Encoded image, usually a `data:image/png;base64,...` URI
    pub data: String,
}

/// Terminal callback handed to a [`StructureDrawer`].
///
/// Exactly one call is expected; dropping it without calling counts as a
/// failure.
pub type DrawCallback = Box<dyn FnOnce(Result<Canvas, BackendError>) + Send>;

/// Draws chemical structures from SMILES notation.
///
/// Drawing is asynchronous: the drawer parses the notation and later
/// invokes `done` once, from any thread. There is no cancellation.
pub trait StructureDrawer: Send + Sync {
    /// Start drawing `smiles` onto a canvas sized by `options`.
    fn draw(&self, smiles: &str, options: &SmilesOptions, done: DrawCallback);
}

/// The set of capabilities available to the pipeline.
#[derive(Clone, Default)]
pub struct Capabilities {
    /// Math typesetting
    pub typesetter: Option<Arc<dyn Typesetter>>,
    /// Netlist layout
    pub netlist: Option<Arc<dyn NetlistRenderer>>,
    /// Chemical structure drawing
    pub structure: Option<Arc<dyn StructureDrawer>>,
}

impl Capabilities {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the typesetter.
    pub fn with_typesetter(mut self, typesetter: Arc<dyn Typesetter>) -> Self {
        self.typesetter = Some(typesetter);
        self
    }

    /// Set the netlist renderer.
    pub fn with_netlist(mut self, renderer: Arc<dyn NetlistRenderer>) -> Self {
        self.netlist = Some(renderer);
        self
    }

    /// Set the structure drawer.
    pub fn with_structure_drawer(mut self, drawer: Arc<dyn StructureDrawer>) -> Self {
        self.structure = Some(drawer);
        self
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("typesetter", &self.typesetter.is_some())
            .field("netlist", &self.netlist.is_some())
            .field("structure", &self.structure.is_some())
            .finish()
    }
}

/// Run a capability call, turning rejections and panics into errors.
pub(crate) fn isolate<T>(
    backend: &str,
    call: impl FnOnce() -> Result<T, BackendError>,
) -> Result<T, Error> {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(Error::BackendRender(err.0)),
        Err(_) => {
            log::warn!("{} backend panicked", backend);
            Err(Error::BackendRender(format!("{} backend panicked", backend)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_expand() {
        let bbox = BoundingBox::new(0.0, 5.0, 100.0, 50.0).expand(10.0);
        assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 120.0, 70.0));
    }

    #[test]
    fn test_isolate_maps_rejection() {
        let result: Result<(), Error> = isolate("test", || Err(BackendError::new("bad input")));
        assert_eq!(result, Err(Error::BackendRender("bad input".into())));
    }

    #[test]
    fn test_isolate_catches_panic() {
        let result: Result<(), Error> = isolate("test", || panic!("boom"));
        assert!(matches!(result, Err(Error::BackendRender(msg)) if msg.contains("panicked")));
    }

    #[test]
    fn test_closure_typesetter() {
        let typesetter = |latex: &str, _mode: MathMode| -> Result<String, BackendError> {
            Ok(format!("<m>{}</m>", latex))
        };
        assert_eq!(typesetter.typeset("x", MathMode::Inline).unwrap(), "<m>x</m>");
    }

    #[test]
    fn test_capabilities_debug() {
        let caps = Capabilities::new();
        assert!(format!("{:?}", caps).contains("typesetter: false"));
    }
}
