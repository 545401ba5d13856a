//! Last-write-wins debounce for resize events.
//!
//! The host owns the actual timer: each raw event yields a [`ResizeTicket`],
//! the host waits `ticket.delay` and hands the ticket back. Issuing a new
//! ticket supersedes every earlier one, so only the trailing event of a
//! burst is applied.

use std::time::Duration;

/// A scheduled resize recomputation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResizeTicket {
    pub generation: u64,
    pub width: u32,
    pub delay: Duration,
}

/// Generation counter acting as the cancellable timer handle
#[derive(Debug)]
pub struct ResizeDebounce {
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: false,
        }
    }

    /// Supersede any pending ticket and schedule a new one
    pub fn schedule(&mut self, width: u32) -> ResizeTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        ResizeTicket {
            generation: self.generation,
            width,
            delay: self.delay,
        }
    }

    /// Consume a ticket; returns the width only if the ticket is current
    pub fn take(&mut self, ticket: &ResizeTicket) -> Option<u32> {
        if self.pending && ticket.generation == self.generation {
            self.pending = false;
            Some(ticket.width)
        } else {
            None
        }
    }

    /// Drop whatever is pending
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let mut debounce = ResizeDebounce::new(Duration::from_millis(250));
        let first = debounce.schedule(800);
        let second = debounce.schedule(900);
        let third = debounce.schedule(1200);

        assert_eq!(debounce.take(&first), None);
        assert_eq!(debounce.take(&second), None);
        assert_eq!(debounce.take(&third), Some(1200));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut debounce = ResizeDebounce::new(Duration::from_millis(250));
        let ticket = debounce.schedule(1000);
        assert_eq!(ticket.delay, Duration::from_millis(250));
        assert_eq!(debounce.take(&ticket), Some(1000));
        assert_eq!(debounce.take(&ticket), None);
    }

    #[test]
    fn cancel_invalidates_pending() {
        let mut debounce = ResizeDebounce::new(Duration::from_millis(250));
        let ticket = debounce.schedule(1000);
        debounce.cancel();
        assert_eq!(debounce.take(&ticket), None);
    }
}
