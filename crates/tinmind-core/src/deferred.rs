//! Cancellable deferred hide.
//!
//! Blurring the search input should hide the panel, but only after a short
//! delay so a click on a result can land first. The host sleeps for the
//! delay and then redeems the [`HideTicket`] it was handed; any cancel or
//! newer schedule in between makes the old ticket worthless.

/// Token identifying one scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    generation: u64,
}

/// At most one pending hide, tracked by generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredHide {
    generation: u64,
    pending: bool,
}

impl DeferredHide {
    /// Schedules a hide, superseding any pending one.
    pub fn schedule(&mut self) -> HideTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        HideTicket {
            generation: self.generation,
        }
    }

    /// Cancels the pending hide. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Redeems `ticket` once its delay has elapsed.
    ///
    /// True only for the latest uncancelled ticket, and only the first time.
    pub fn fire(&mut self, ticket: HideTicket) -> bool {
        if self.pending && ticket.generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_fires_once() {
        let mut hide = DeferredHide::default();
        let ticket = hide.schedule();

        assert!(hide.fire(ticket));
        assert!(!hide.fire(ticket));
        assert!(!hide.is_pending());
    }

    #[test]
    fn test_cancelled_ticket_does_not_fire() {
        let mut hide = DeferredHide::default();
        let ticket = hide.schedule();

        assert!(hide.cancel());
        assert!(!hide.fire(ticket));
    }

    #[test]
    fn test_reschedule_supersedes_old_ticket() {
        let mut hide = DeferredHide::default();
        let first = hide.schedule();
        let second = hide.schedule();

        assert!(!hide.fire(first));
        assert!(hide.fire(second));
    }

    #[test]
    fn test_cancel_without_pending() {
        let mut hide = DeferredHide::default();
        assert!(!hide.cancel());
    }
}
