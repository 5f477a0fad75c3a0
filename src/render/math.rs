//! Math span rendering through an injected typesetter.

use std::sync::Arc;

use crate::capability::{isolate, Typesetter};
use crate::error::Error;
use crate::model::MathMode;

use super::{Fragment, RenderResult};

/// Renders LaTeX spans with a [`Typesetter`].
///
/// Never panics and never errors out of a document render: when the
/// typesetter is missing, rejects the input or panics, the failure carries
/// the raw LaTeX (without delimiters) as a text fallback.
#[derive(Clone, Default)]
pub struct MathRenderer {
    typesetter: Option<Arc<dyn Typesetter>>,
}

impl MathRenderer {
    /// Create a renderer without a typesetter. Every span falls back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer backed by a typesetter.
    pub fn with_typesetter(typesetter: Arc<dyn Typesetter>) -> Self {
        Self {
            typesetter: Some(typesetter),
        }
    }

    /// Create a renderer from an optional capability.
    pub fn from_capability(typesetter: Option<Arc<dyn Typesetter>>) -> Self {
        Self { typesetter }
    }

    /// Check if a typesetter is available.
    pub fn is_available(&self) -> bool {
        self.typesetter.is_some()
    }

    /// Render one span.
    pub fn render(&self, latex: &str, mode: MathMode) -> RenderResult {
        let fallback = || Fragment::text(latex);

        let Some(typesetter) = self.typesetter.as_ref() else {
            return RenderResult::failure_with_fallback(
                Error::CapabilityUnavailable("typesetting".into()),
                fallback(),
            );
        };

        match isolate("typesetting", || typesetter.typeset(latex, mode)) {
            Ok(html) => RenderResult::Success(Fragment::Math { html, mode }),
            Err(err) => {
                log::debug!("MathRenderer: falling back for {:?}: {}", latex, err);
                RenderResult::failure_with_fallback(err, fallback())
            }
        }
    }
}

impl std::fmt::Debug for MathRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MathRenderer")
            .field("typesetter", &self.typesetter.is_some())
            .finish()
    }
}
