//! Debounced scheduling.
//!
//! A [`Debouncer`] holds at most one pending run. Scheduling again
//! supersedes the pending run, so a burst of triggers collapses into a single
//! run `window` after the last one.
//!
//! Two kinds of host are supported:
//! - timer hosts sleep for [`Debouncer::window`] and then call
//!   [`Debouncer::fire`] with the ticket they were given; stale tickets are
//!   rejected.
//! - tick hosts call [`Debouncer::poll`] with the current time.

use std::time::{Duration, Instant};

/// Default search debounce window.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(160);

/// Handle identifying one scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: Ticket,
    due: Instant,
}

/// Cancellable single-slot scheduler.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    next: u64,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            next: 0,
            pending: None,
        }
    }

    /// Quiet window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule a run `window` after `now`, superseding any pending run.
    pub fn schedule(&mut self, now: Instant) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.pending = Some(Pending {
            ticket,
            due: now + self.window,
        });
        ticket
    }

    /// Drop the pending run. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Claim the run for `ticket`.
    ///
    /// Returns `true` only if `ticket` is the pending one; the slot is then
    /// cleared so the run happens once.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Claim the pending run if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.due => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Deadline of the pending run.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_burst_collapses_to_one_run() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        // 5 keystrokes, 20ms apart.
        let mut last = start;
        for i in 0..5 {
            last = start + MS * (i * 20);
            debouncer.schedule(last);
            assert!(!debouncer.poll(last));
        }

        let mut runs = Vec::new();
        for t in (0..=400).step_by(5) {
            let now = start + MS * t;
            if debouncer.poll(now) {
                runs.push(now);
            }
        }

        assert_eq!(runs, vec![last + SEARCH_DEBOUNCE]);
    }

    #[test]
    fn test_not_due_before_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.schedule(start);
        assert!(!debouncer.poll(start + MS * 159));
        assert!(debouncer.poll(start + MS * 160));
        assert!(!debouncer.poll(start + MS * 500));
    }

    #[test]
    fn test_stale_ticket_rejected() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule(start);
        let second = debouncer.schedule(start + MS * 20);

        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
        assert!(!debouncer.fire(second));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let ticket = debouncer.schedule(start);
        assert_eq!(debouncer.due_at(), Some(start + MS * 50));

        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert!(!debouncer.fire(ticket));
        assert!(!debouncer.poll(start + MS * 100));
    }
}
