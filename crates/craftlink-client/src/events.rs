//! Change notifications emitted after every store mutation.
//!
//! Subscribers (UI screens) receive coarse per-slice events and re-read the
//! views they depend on.  A lagging subscriber only misses intermediate
//! events, never the current state.

use tokio::sync::broadcast;

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_BUFFER: usize = 64;

/// One event per mutated slice of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    SessionChanged,
    DirectoryChanged,
    JobsChanged,
    ProposalsChanged,
    LedgerChanged,
    NotificationsChanged,
    MessagesChanged,
    Navigated,
}

pub(crate) fn channel() -> broadcast::Sender<StoreEvent> {
    broadcast::channel(EVENT_BUFFER).0
}
