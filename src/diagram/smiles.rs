//! SMILES payloads, drawn asynchronously by a [`StructureDrawer`].
//!
//! The drawer reports back through a callback. The callback is bridged to
//! a oneshot channel so callers can await the outcome.

use tokio::sync::oneshot;

use crate::capability::{isolate, BackendError, Canvas, DrawCallback, StructureDrawer};
use crate::error::Error;
use crate::render::{Fragment, Layout, RenderResult};

use super::SmilesOptions;

/// Receiver side of an in-flight drawing.
pub(crate) type Pending = oneshot::Receiver<Result<Canvas, BackendError>>;

/// Outcome of starting a drawing.
pub(crate) enum Started {
    /// Settled synchronously (missing capability, or the drawer failed
    /// before accepting the request)
    Ready(RenderResult),
    /// Waiting for the drawer's callback
    Waiting(Pending),
}

/// Hand a SMILES string to the drawer.
pub(crate) fn start(
    drawer: Option<&dyn StructureDrawer>,
    smiles: &str,
    options: &SmilesOptions,
) -> Started {
    let Some(drawer) = drawer else {
        return Started::Ready(RenderResult::failure(Error::CapabilityUnavailable(
            "chemical structure".into(),
        )));
    };

    let (tx, rx) = oneshot::channel();
    let done: DrawCallback = Box::new(move |result| {
        // The receiver is gone when the handle was dropped.
        let _ = tx.send(result);
    });

    let smiles = smiles.trim();
    match isolate("chemical structure", move || {
        drawer.draw(smiles, options, done);
        Ok(())
    }) {
        Ok(()) => Started::Waiting(rx),
        Err(err) => Started::Ready(RenderResult::failure(err)),
    }
}

/// Wait for the drawer and turn its report into a result.
pub(crate) async fn finish(pending: Pending, options: &SmilesOptions) -> RenderResult {
    match pending.await {
        Ok(Ok(canvas)) => RenderResult::Success(Fragment::Canvas {
            width: canvas.width,
            height: canvas.height,
            data: canvas.data,
            layout: Layout::fill().with_max_height(options.max_height),
        }),
        Ok(Err(err)) => RenderResult::failure(Error::BackendRender(format!(
            "Failed to parse chemical structure: {}",
            err
        ))),
        Err(_) => RenderResult::failure(Error::BackendRender(
            "chemical structure drawer dropped the request".into(),
        )),
    }
}
