//! Display targets with generation-based stale-result suppression.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::render::RenderResult;

/// A display region that shows one diagram at a time.
///
/// Every render issued for the target takes a ticket from a monotonically
/// increasing generation counter. A result is committed only while its
/// ticket is still the newest, so a slow render can never overwrite the
/// result of one issued after it.
#[derive(Debug, Default)]
pub struct RenderTarget {
    state: Mutex<TargetState>,
}

#[derive(Debug, Default)]
struct TargetState {
    generation: u64,
    content: Option<RenderResult>,
}

impl RenderTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, TargetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current generation, i.e. the ticket of the newest render.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Start a new render: invalidate outstanding tickets, clear the
    /// content and return the new ticket.
    pub(crate) fn begin(&self) -> u64 {
        let mut state = self.lock();
        state.generation += 1;
        state.content = None;
        state.generation
    }

    /// Commit a result if `ticket` is still current.
    pub(crate) fn commit(&self, ticket: u64, result: RenderResult) -> bool {
        let mut state = self.lock();
        if state.generation != ticket {
            return false;
        }
        state.content = Some(result);
        true
    }

    /// Check if `ticket` is still the newest.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.lock().generation == ticket
    }

    /// Snapshot of the committed result, if any.
    pub fn content(&self) -> Option<RenderResult> {
        self.lock().content.clone()
    }

    /// Check if nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.lock().content.is_none()
    }

    /// Clear the content and invalidate outstanding renders.
    pub fn clear(&self) {
        self.begin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fragment;

    #[test]
    fn test_commit_current_ticket() {
        let target = RenderTarget::new();
        let ticket = target.begin();
        assert!(target.commit(ticket, RenderResult::Success(Fragment::text("a"))));
        assert_eq!(
            target.content(),
            Some(RenderResult::Success(Fragment::text("a")))
        );
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let target = RenderTarget::new();
        let old = target.begin();
        let new = target.begin();
        assert!(new > old);
        assert!(!target.commit(old, RenderResult::Success(Fragment::text("old"))));
        assert!(target.is_empty());
        assert!(target.commit(new, RenderResult::Success(Fragment::text("new"))));
    }

    #[test]
    fn test_begin_clears_content() {
        let target = RenderTarget::new();
        let ticket = target.begin();
        target.commit(ticket, RenderResult::Success(Fragment::text("a")));
        target.clear();
        assert!(target.is_empty());
        assert!(!target.is_current(ticket));
    }
}
