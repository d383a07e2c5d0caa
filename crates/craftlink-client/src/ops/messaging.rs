//! Chat messages.
//!
//! Messages live in one flat list; there is no per-conversation key and the
//! counterpart is a fixed placeholder.  Kept as observed rather than
//! silently redesigned — see DESIGN.md.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use craftlink_shared::{Account, Message};

use crate::events::StoreEvent;
use crate::store::Store;

impl Store {
    /// Append a message, attributed to the active session when one exists.
    pub fn post_message(&mut self, content: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state.messages.push(Message {
            id,
            sender_id: self.state.session.as_ref().map(Account::id),
            receiver_id: None,
            content: content.to_string(),
            sent_at: Utc::now(),
        });
        self.emit(StoreEvent::MessagesChanged);
        debug!(message = %id, "message posted");
        id
    }
}
