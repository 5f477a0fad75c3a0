//! Diagram dispatch: typed payloads to fragments on a display target.
//!
//! NETLIST, SVG and IMAGE payloads render synchronously. SMILES payloads
//! depend on a callback-driven drawer and resolve later. Either way the
//! outcome lands on a [`RenderTarget`] only if no newer render was issued
//! for that target in the meantime.

mod image;
mod netlist;
mod options;
mod smiles;
mod svg;
mod target;

use std::sync::Arc;

pub use netlist::{NetCell, Netlist, NetlistModule, Port, PortDirection, Signal};
pub use options::{DiagramOptions, SmilesOptions, Theme};
pub use svg::{apply_root_style, extract_svg_span};
pub use target::RenderTarget;

use crate::capability::Capabilities;
use crate::error::Error;
use crate::model::{DiagramPayload, DiagramType};
use crate::render::{Fragment, RenderResult};

/// Routes diagram payloads to their backends.
#[derive(Debug, Clone, Default)]
pub struct DiagramDispatcher {
    capabilities: Capabilities,
    options: DiagramOptions,
}

impl DiagramDispatcher {
    /// Create a dispatcher with default options.
    pub fn new(capabilities: Capabilities) -> Self {
        Self::with_options(capabilities, DiagramOptions::default())
    }

    /// Create a dispatcher with custom options.
    pub fn with_options(capabilities: Capabilities, options: DiagramOptions) -> Self {
        Self {
            capabilities,
            options,
        }
    }

    /// Get the diagram options.
    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    /// Get the capabilities.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Render `payload` into `target`.
    ///
    /// The target is cleared and all earlier renders for it are superseded
    /// before this returns, so results always follow issue order. Synchronous
    /// types are committed immediately; the returned handle resolves to the
    /// committed result, or to [`Error::Superseded`] if a newer render won.
    pub fn render(&self, payload: &DiagramPayload, target: &Arc<RenderTarget>) -> RenderHandle {
        let ticket = target.begin();
        log::debug!(
            "DiagramDispatcher: rendering {} ({} bytes) as ticket {}",
            payload.kind,
            payload.data.len(),
            ticket
        );

        let handle = |state| RenderHandle {
            target: Arc::clone(target),
            ticket,
            kind: payload.kind,
            message_limit: self.options.error_message_limit,
            smiles: self.options.smiles.clone(),
            state,
        };

        if payload.is_blank() {
            let result = RenderResult::failure(Error::InvalidPayload("empty diagram data".into()));
            return handle(HandleState::Settled(commit_or_supersede(
                payload.kind,
                target,
                ticket,
                result,
            )));
        }

        let result = match payload.kind {
            DiagramType::Netlist => netlist::render(
                self.capabilities.netlist.as_deref(),
                &payload.data,
                &self.options,
            ),
            DiagramType::Svg => svg::render(&payload.data, &self.options),
            DiagramType::Image => image::render(&payload.data, &self.options),
            DiagramType::Smiles => match smiles::start(
                self.capabilities.structure.as_deref(),
                &payload.data,
                &self.options.smiles,
            ) {
                smiles::Started::Ready(result) => result,
                smiles::Started::Waiting(pending) => {
                    return handle(HandleState::Waiting(pending));
                }
            },
        };

        handle(HandleState::Settled(commit_or_supersede(
            payload.kind,
            target,
            ticket,
            result,
        )))
    }
}

fn commit_or_supersede(
    kind: DiagramType,
    target: &RenderTarget,
    ticket: u64,
    result: RenderResult,
) -> RenderResult {
    if let RenderResult::Failure { error, .. } = &result {
        log::warn!("{} diagram failed to render: {}", kind, error);
    }
    if target.commit(ticket, result.clone()) {
        result
    } else {
        log::debug!("{} render for ticket {} was superseded", kind, ticket);
        RenderResult::failure(Error::Superseded)
    }
}

enum HandleState {
    Settled(RenderResult),
    Waiting(smiles::Pending),
}

/// Handle to an issued diagram render.
///
/// Dropping the handle of a pending render abandons it; the target keeps
/// whatever was committed last (nothing, if this was the newest render).
pub struct RenderHandle {
    target: Arc<RenderTarget>,
    ticket: u64,
    kind: DiagramType,
    message_limit: usize,
    smiles: SmilesOptions,
    state: HandleState,
}

impl RenderHandle {
    /// Ticket of this render on its target.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Diagram type being rendered.
    pub fn kind(&self) -> DiagramType {
        self.kind
    }

    /// Check if the outcome is already known.
    pub fn is_settled(&self) -> bool {
        matches!(self.state, HandleState::Settled(_))
    }

    /// Check if a newer render has been issued for the same target.
    pub fn is_superseded(&self) -> bool {
        !self.target.is_current(self.ticket)
    }

    /// Wait for the outcome and commit it if still current.
    pub async fn resolve(self) -> RenderResult {
        match self.state {
            HandleState::Settled(result) => result,
            HandleState::Waiting(pending) => {
                let result = smiles::finish(pending, &self.smiles).await;
                commit_or_supersede(self.kind, &self.target, self.ticket, result)
            }
        }
    }

    /// Wait for the outcome and return what should be displayed for it:
    /// the fragment, its fallback, or an error box.
    pub async fn resolve_display(self) -> Fragment {
        let limit = self.message_limit;
        self.resolve().await.display_fragment(limit)
    }
}

impl std::fmt::Debug for RenderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderHandle")
            .field("ticket", &self.ticket)
            .field("kind", &self.kind)
            .field("settled", &self.is_settled())
            .finish()
    }
}
