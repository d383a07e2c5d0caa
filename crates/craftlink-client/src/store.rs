//! The [`Store`]: single owner of all mutable application data.
//!
//! Every read goes through a typed view and every write through one of the
//! operations in [`crate::ops`].  Operations run to completion on the caller's
//! thread (there is no internal concurrency to arbitrate) and finish by
//! mirroring the touched slices to the durable store and broadcasting a
//! [`StoreEvent`].

use tokio::sync::broadcast;

use craftlink_shared::{
    Account, Conversation, Developer, Job, Message, Notification, Proposal, Transaction,
};
use craftlink_store::Database;

use crate::error::Result;
use crate::events::{self, StoreEvent};
use crate::state::AppState;

pub struct Store {
    pub(crate) state: AppState,
    pub(crate) db: Option<Database>,
    events: broadcast::Sender<StoreEvent>,
}

impl Store {
    /// A store with no durable backing, populated from the seed dataset.
    ///
    /// Mutations still succeed; they simply skip the persistence step.
    pub fn in_memory() -> Self {
        Self {
            state: AppState::seeded(),
            db: None,
            events: events::channel(),
        }
    }

    /// Rehydrate a store from an open database.
    ///
    /// The persisted slices (session, directory, jobs, ledger) come from
    /// their snapshots — or the seed dataset where absent or unreadable.
    /// The remaining collections always start from the seed.
    pub fn open(db: Database) -> Self {
        let mut state = AppState::seeded();
        state.session = db.load_session();
        state.directory = db.load_directory();
        state.jobs = db.load_jobs();
        state.ledger = db.load_ledger();

        tracing::info!(
            session = state.session.as_ref().map(|s| s.name().to_string()),
            developers = state.directory.len(),
            jobs = state.jobs.len(),
            "store rehydrated"
        );

        Self {
            state,
            db: Some(db),
            events: events::channel(),
        }
    }

    /// Open the default on-disk database and rehydrate from it.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Database::new()?))
    }

    /// Subscribe to change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: StoreEvent) {
        // A send error only means there is no subscriber right now.
        let _ = self.events.send(event);
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn session(&self) -> Option<&Account> {
        self.state.session.as_ref()
    }

    pub fn directory(&self) -> &[Developer] {
        &self.state.directory
    }

    pub fn jobs(&self) -> &[Job] {
        &self.state.jobs
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.state.proposals
    }

    pub fn ledger(&self) -> &[Transaction] {
        &self.state.ledger
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.state.notifications
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.state.conversations
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    // ------------------------------------------------------------------
    // Navigation pointer
    // ------------------------------------------------------------------

    pub fn current_path(&self) -> &str {
        self.state.nav.path()
    }

    /// Set the current path.  The sole navigation primitive.
    pub fn navigate(&mut self, path: &str) {
        self.state.nav.set(path);
        self.emit(StoreEvent::Navigated);
    }

    /// Re-apply an externally observed location fragment (back/forward).
    pub fn sync_fragment(&mut self, raw: &str) {
        self.state.nav.apply_fragment(raw);
        self.emit(StoreEvent::Navigated);
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub(crate) fn persist_session(&self) -> Result<()> {
        if let Some(ref db) = self.db {
            db.save_session(&self.state.session)?;
        }
        Ok(())
    }

    pub(crate) fn persist_directory(&self) -> Result<()> {
        if let Some(ref db) = self.db {
            db.save_directory(&self.state.directory)?;
        }
        Ok(())
    }

    pub(crate) fn persist_jobs(&self) -> Result<()> {
        if let Some(ref db) = self.db {
            db.save_jobs(&self.state.jobs)?;
        }
        Ok(())
    }

    pub(crate) fn persist_ledger(&self) -> Result<()> {
        if let Some(ref db) = self.db {
            db.save_ledger(&self.state.ledger)?;
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::in_memory()
    }
}
