//! Ordering for keystroke-triggered suggestion queries.
//!
//! Queries are never cancelled, so a slow one can finish after a newer one.
//! Tag each query with a ticket before issuing it and ask [`LatestOnly`]
//! whether its result may still be shown.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Per-field gate that only lets through results newer than the last one shown.
#[derive(Debug, Default)]
pub struct LatestOnly {
    issued: AtomicU64,
    accepted: AtomicU64,
}

impl LatestOnly {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ticket; sequence numbers start at 1 and only increase.
    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.issued.fetch_add(1, Ordering::SeqCst).saturating_add(1))
    }

    /// Accept `ticket` if it is newer than every ticket accepted so far.
    pub fn accept(&self, ticket: QueryTicket) -> bool {
        self.accepted.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }
}
