use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Sequence number of one request issued by a [`RequestTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Issues tickets for one action; only the latest ticket is current.
///
/// Clones share the same sequence.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// `false` once a newer ticket has been issued
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.clone().issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_trackers_are_independent() {
        let sentiment = RequestTracker::new();
        let qa = RequestTracker::new();
        let ticket = sentiment.issue();
        qa.issue();
        assert!(sentiment.is_current(ticket));
    }
}
