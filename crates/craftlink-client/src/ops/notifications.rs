//! Notification emission and read tracking.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use craftlink_shared::{Notification, NotificationKind, NotificationTarget};

use crate::events::StoreEvent;
use crate::store::Store;

impl Store {
    /// Prepend a notification for one user or the `all` broadcast.
    pub fn emit_notification(
        &mut self,
        target: NotificationTarget,
        message: &str,
        kind: NotificationKind,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.state.notifications.insert(
            0,
            Notification {
                id,
                target,
                kind,
                message: message.to_string(),
                read: false,
                created_at: Utc::now(),
            },
        );
        self.emit(StoreEvent::NotificationsChanged);
        debug!(notification = %id, ?kind, "notification emitted");
        id
    }

    /// Mark a notification read.  Idempotent; unknown ids are ignored.
    pub fn mark_notification_read(&mut self, id: Uuid) {
        let Some(notif) = self.state.notifications.iter_mut().find(|n| n.id == id) else {
            return;
        };
        if notif.read {
            return;
        }
        notif.read = true;
        self.emit(StoreEvent::NotificationsChanged);
    }

    /// Notifications visible to the active session: those addressed to it
    /// plus every broadcast.  Empty when logged out.
    pub fn notifications_for_session(&self) -> Vec<&Notification> {
        let Some(ref session) = self.state.session else {
            return Vec::new();
        };
        let me = session.id();
        self.state
            .notifications
            .iter()
            .filter(|n| n.target.addresses(me))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftlink_shared::Role;

    #[test]
    fn mark_read_is_idempotent() {
        let mut store = Store::in_memory();
        let id = store.emit_notification(
            NotificationTarget::All,
            "maintenance tonight",
            NotificationKind::Info,
        );
        let count = store.notifications().len();

        store.mark_notification_read(id);
        store.mark_notification_read(id);

        assert_eq!(store.notifications().len(), count);
        let notif = store.notifications().iter().find(|n| n.id == id).unwrap();
        assert!(notif.read);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut store = Store::in_memory();
        let before = store.notifications().to_vec();
        store.mark_notification_read(Uuid::new_v4());
        assert_eq!(store.notifications(), &before[..]);
    }

    #[test]
    fn session_view_includes_broadcasts_and_own_entries_only() {
        let mut store = Store::in_memory();
        store
            .create_session("c@example.com", Some(Role::Client), None)
            .unwrap();
        let me = store.session().unwrap().id();

        let broadcast =
            store.emit_notification(NotificationTarget::All, "hello all", NotificationKind::Info);
        let mine = store.emit_notification(
            NotificationTarget::User(me),
            "hello me",
            NotificationKind::Success,
        );
        let other = store.emit_notification(
            NotificationTarget::User(Uuid::new_v4()),
            "not for me",
            NotificationKind::Warning,
        );

        let visible: Vec<Uuid> = store
            .notifications_for_session()
            .iter()
            .map(|n| n.id)
            .collect();
        assert!(visible.contains(&broadcast));
        assert!(visible.contains(&mine));
        assert!(!visible.contains(&other));
    }
}
