//! Administrative actions: blocking accounts and resolving identity reviews.

use tracing::info;
use uuid::Uuid;

use craftlink_shared::constants::{KYC_APPROVED_MESSAGE, KYC_REJECTED_MESSAGE};
use craftlink_shared::{KycDecision, NotificationKind, NotificationTarget};

use crate::error::{ClientError, Result};
use crate::events::StoreEvent;
use crate::store::Store;

impl Store {
    /// Block or unblock a directory account.
    ///
    /// A blocked account keeps all its stored data but is refused at the
    /// next session creation.  When the affected user is also the active
    /// session, the flag is mirrored there.
    pub fn set_user_blocked(&mut self, user_id: Uuid, blocked: bool) -> Result<()> {
        let entry = self
            .state
            .directory
            .iter_mut()
            .find(|d| d.id == user_id)
            .ok_or(ClientError::UnknownUser(user_id))?;
        entry.blocked = blocked;

        let mut session_touched = false;
        if let Some(ref mut session) = self.state.session {
            if session.id() == user_id {
                session.set_blocked(blocked);
                session_touched = true;
            }
        }
        if session_touched {
            self.persist_session()?;
            self.emit(StoreEvent::SessionChanged);
        }

        self.persist_directory()?;
        self.emit(StoreEvent::DirectoryChanged);
        info!(user = %user_id, blocked, "account block status changed");
        Ok(())
    }

    /// Resolve a pending identity review.
    ///
    /// Moves the directory record (and a matching session) to verified or
    /// rejected, and notifies the user with the fixed per-outcome message.
    /// Only legal while the review is pending.
    pub fn resolve_identity_verification(
        &mut self,
        user_id: Uuid,
        decision: KycDecision,
    ) -> Result<()> {
        let target = decision.resulting_status();

        let entry = self
            .state
            .directory
            .iter_mut()
            .find(|d| d.id == user_id)
            .ok_or(ClientError::UnknownUser(user_id))?;

        if !entry.kyc_status.can_transition(target) {
            return Err(ClientError::KycTransition {
                from: entry.kyc_status,
                to: target,
            });
        }
        entry.kyc_status = target;

        let mut session_touched = false;
        if let Some(ref mut session) = self.state.session {
            if session.id() == user_id {
                session.set_kyc_status(target);
                session_touched = true;
            }
        }
        if session_touched {
            self.persist_session()?;
            self.emit(StoreEvent::SessionChanged);
        }

        self.persist_directory()?;
        self.emit(StoreEvent::DirectoryChanged);

        let (message, kind) = match decision {
            KycDecision::Approve => (KYC_APPROVED_MESSAGE, NotificationKind::Success),
            KycDecision::Reject => (KYC_REJECTED_MESSAGE, NotificationKind::Warning),
        };
        self.emit_notification(NotificationTarget::User(user_id), message, kind);

        info!(user = %user_id, status = ?target, "identity review resolved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftlink_shared::{KycStatus, Role};

    use crate::ops::profile::IdentitySubmission;
    use crate::ops::session::Registration;

    fn store_with_pending_developer() -> (Store, Uuid) {
        let mut store = Store::in_memory();
        let id = store
            .register_account(Registration::new(
                "Sam",
                "sam@example.com",
                String::new(),
                Role::Developer,
            ))
            .unwrap();
        store
            .submit_identity_verification(IdentitySubmission::default())
            .unwrap();
        (store, id)
    }

    #[test]
    fn approval_verifies_and_notifies_exactly_once() {
        let (mut store, id) = store_with_pending_developer();
        let before = store.notifications().len();

        store
            .resolve_identity_verification(id, KycDecision::Approve)
            .unwrap();

        let entry = store.directory().iter().find(|d| d.id == id).unwrap();
        assert_eq!(entry.kyc_status, KycStatus::Verified);
        // active session mirrors the outcome
        assert_eq!(store.session().unwrap().kyc_status(), KycStatus::Verified);

        assert_eq!(store.notifications().len(), before + 1);
        let notif = &store.notifications()[0];
        assert_eq!(notif.target, NotificationTarget::User(id));
        assert_eq!(notif.message, KYC_APPROVED_MESSAGE);
        assert_eq!(notif.kind, NotificationKind::Success);
    }

    #[test]
    fn rejection_uses_the_fixed_rejection_message() {
        let (mut store, id) = store_with_pending_developer();

        store
            .resolve_identity_verification(id, KycDecision::Reject)
            .unwrap();

        let entry = store.directory().iter().find(|d| d.id == id).unwrap();
        assert_eq!(entry.kyc_status, KycStatus::Rejected);
        assert_eq!(store.notifications()[0].message, KYC_REJECTED_MESSAGE);
    }

    #[test]
    fn resolving_a_review_that_is_not_pending_fails() {
        let mut store = Store::in_memory();
        let id = store
            .register_account(Registration::new(
                "Sam",
                "sam@example.com",
                String::new(),
                Role::Developer,
            ))
            .unwrap();

        let err = store
            .resolve_identity_verification(id, KycDecision::Approve)
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::KycTransition {
                from: KycStatus::Unverified,
                to: KycStatus::Verified,
            }
        ));
    }

    #[test]
    fn block_round_trip_gates_login() {
        let (mut store, id) = store_with_pending_developer();
        store.end_session().unwrap();

        store.set_user_blocked(id, true).unwrap();
        let err = store
            .create_session("sam@example.com", Some(Role::Developer), None)
            .unwrap_err();
        assert!(matches!(err, ClientError::AccountBlocked));
        assert!(store.session().is_none());

        store.set_user_blocked(id, false).unwrap();
        store
            .create_session("sam@example.com", Some(Role::Developer), None)
            .unwrap();
        assert_eq!(store.session().unwrap().id(), id);
    }

    #[test]
    fn blocking_the_active_session_mirrors_the_flag() {
        let (mut store, id) = store_with_pending_developer();
        store.set_user_blocked(id, true).unwrap();
        assert!(store.session().unwrap().blocked());
    }

    #[test]
    fn unknown_user_is_reported() {
        let mut store = Store::in_memory();
        let ghost = Uuid::new_v4();
        let err = store.set_user_blocked(ghost, true).unwrap_err();
        assert!(matches!(err, ClientError::UnknownUser(id) if id == ghost));
    }
}
