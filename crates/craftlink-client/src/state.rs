//! In-memory application state owned by the [`Store`](crate::Store).
//!
//! Screens never hold references into these collections across mutations;
//! they re-read through the store's views after each
//! [`StoreEvent`](crate::StoreEvent).

use craftlink_shared::seed;
use craftlink_shared::{
    Account, Conversation, Developer, Job, Message, Notification, Proposal, Transaction,
};

use crate::nav::Nav;

/// Every mutable collection of the application, plus the navigation pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The authenticated session, if any.
    pub session: Option<Account>,
    /// Denormalized developer directory.
    pub directory: Vec<Developer>,
    /// Job board, most recent first.
    pub jobs: Vec<Job>,
    /// Proposals, most recent first.
    pub proposals: Vec<Proposal>,
    /// Append-only transaction ledger, oldest first.
    pub ledger: Vec<Transaction>,
    /// Notifications, most recent first.
    pub notifications: Vec<Notification>,
    /// Inbox conversation summaries.
    pub conversations: Vec<Conversation>,
    /// Flat chat message list, oldest first.
    pub messages: Vec<Message>,
    /// Navigation pointer.
    pub nav: Nav,
}

impl AppState {
    /// State populated entirely from the seed dataset, logged out.
    pub fn seeded() -> Self {
        Self {
            session: None,
            directory: seed::directory(),
            jobs: seed::jobs(),
            proposals: seed::proposals(),
            ledger: seed::ledger(),
            notifications: seed::notifications(),
            conversations: seed::conversations(),
            messages: seed::messages(),
            nav: Nav::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}
