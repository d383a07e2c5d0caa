//! Profile edits and identity-verification submission.

use tracing::info;

use craftlink_shared::{
    Account, Developer, Gender, KycDocumentType, KycStatus, PortfolioItem, RealIdentity,
};

use crate::error::{ClientError, Result};
use crate::events::StoreEvent;
use crate::store::Store;

/// Partial profile update.  Only the fields present are merged; everything
/// else on the record is preserved.
#[derive(Debug, Clone, Default)]
pub struct DeveloperPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub hourly_rate: Option<u64>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub available: Option<bool>,
    pub portfolio: Option<Vec<PortfolioItem>>,
}

impl DeveloperPatch {
    fn apply(&self, dev: &mut Developer) {
        if let Some(ref name) = self.name {
            dev.name = name.clone();
        }
        if let Some(ref phone) = self.phone {
            dev.phone = phone.clone();
        }
        if let Some(ref title) = self.title {
            dev.title = title.clone();
        }
        if let Some(ref location) = self.location {
            dev.location = location.clone();
        }
        if let Some(ref skills) = self.skills {
            dev.skills = skills.clone();
        }
        if let Some(rate) = self.hourly_rate {
            dev.hourly_rate = rate;
        }
        if let Some(ref bio) = self.bio {
            dev.bio = bio.clone();
        }
        if let Some(ref url) = self.avatar_url {
            dev.avatar_url = Some(url.clone());
        }
        if let Some(available) = self.available {
            dev.available = available;
        }
        if let Some(ref portfolio) = self.portfolio {
            dev.portfolio = portfolio.clone();
        }
    }
}

/// Identity fields collected by the verification flow.  Merged shallowly
/// into the account's identity block.
#[derive(Debug, Clone, Default)]
pub struct IdentitySubmission {
    pub legal_last_name: Option<String>,
    pub legal_first_name: Option<String>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub gender: Option<Gender>,
    pub document_type: Option<KycDocumentType>,
    pub document_image: Option<String>,
    pub selfie_image: Option<String>,
}

impl IdentitySubmission {
    fn apply(&self, identity: &mut RealIdentity) {
        if self.legal_last_name.is_some() {
            identity.legal_last_name = self.legal_last_name.clone();
        }
        if self.legal_first_name.is_some() {
            identity.legal_first_name = self.legal_first_name.clone();
        }
        if self.birth_date.is_some() {
            identity.birth_date = self.birth_date.clone();
        }
        if self.birth_place.is_some() {
            identity.birth_place = self.birth_place.clone();
        }
        if self.gender.is_some() {
            identity.gender = self.gender;
        }
        if self.document_type.is_some() {
            identity.document_type = self.document_type;
        }
        if self.document_image.is_some() {
            identity.document_image = self.document_image.clone();
        }
        if self.selfie_image.is_some() {
            identity.selfie_image = self.selfie_image.clone();
        }
    }
}

impl Store {
    /// Merge a partial profile update into the developer session and its
    /// directory record.  A no-op for any other (or no) session.
    pub fn update_developer_profile(&mut self, patch: DeveloperPatch) -> Result<()> {
        let Some(Account::Developer(ref mut dev)) = self.state.session else {
            return Ok(());
        };

        patch.apply(dev);
        let id = dev.id;

        if let Some(entry) = self.state.directory.iter_mut().find(|d| d.id == id) {
            patch.apply(entry);
        }

        self.persist_session()?;
        self.persist_directory()?;
        self.emit(StoreEvent::SessionChanged);
        self.emit(StoreEvent::DirectoryChanged);
        info!(user = %id, "profile updated");
        Ok(())
    }

    /// Submit identity documents for review.
    ///
    /// Merges the supplied fields into the session's identity block and
    /// moves the verification status to pending; a developer session also
    /// mirrors both into the directory record.  Only legal from the
    /// unverified state.
    pub fn submit_identity_verification(&mut self, submission: IdentitySubmission) -> Result<()> {
        let session = self.state.session.as_mut().ok_or(ClientError::NoSession)?;

        let from = session.kyc_status();
        if !from.can_transition(KycStatus::Pending) {
            return Err(ClientError::KycTransition {
                from,
                to: KycStatus::Pending,
            });
        }

        submission.apply(session.identity_mut().get_or_insert_with(Default::default));
        session.set_kyc_status(KycStatus::Pending);
        let id = session.id();

        if session.as_developer().is_some() {
            if let Some(entry) = self.state.directory.iter_mut().find(|d| d.id == id) {
                submission.apply(entry.identity.get_or_insert_with(Default::default));
                entry.kyc_status = KycStatus::Pending;
            }
            self.persist_directory()?;
            self.emit(StoreEvent::DirectoryChanged);
        }

        self.persist_session()?;
        self.emit(StoreEvent::SessionChanged);
        info!(user = %id, "identity verification submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftlink_shared::Role;

    use crate::ops::session::Registration;

    fn developer_store() -> Store {
        let mut store = Store::in_memory();
        store
            .register_account(Registration::new(
                "Sam",
                "sam@example.com",
                "060000000",
                Role::Developer,
            ))
            .unwrap();
        store
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut store = developer_store();
        store
            .update_developer_profile(DeveloperPatch {
                bio: Some("Ships on time.".into()),
                hourly_rate: Some(9_000),
                ..Default::default()
            })
            .unwrap();

        let dev = store.session().unwrap().as_developer().unwrap();
        assert_eq!(dev.bio, "Ships on time.");
        assert_eq!(dev.hourly_rate, 9_000);
        // untouched fields survive
        assert_eq!(dev.name, "Sam");
        assert_eq!(dev.phone, "060000000");

        let entry = store.directory().iter().find(|d| d.id == dev.id).unwrap();
        assert_eq!(entry.bio, "Ships on time.");
    }

    #[test]
    fn profile_update_without_developer_session_is_a_no_op() {
        let mut store = Store::in_memory();
        store
            .create_session("c@example.com", Some(Role::Client), None)
            .unwrap();
        let before = store.directory().to_vec();

        store
            .update_developer_profile(DeveloperPatch {
                bio: Some("ignored".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.directory(), &before[..]);
    }

    #[test]
    fn submission_moves_status_to_pending_in_both_records() {
        let mut store = developer_store();
        store
            .submit_identity_verification(IdentitySubmission {
                legal_last_name: Some("Okoro".into()),
                legal_first_name: Some("Sam".into()),
                ..Default::default()
            })
            .unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.kyc_status(), KycStatus::Pending);
        let id = session.id();
        let entry = store.directory().iter().find(|d| d.id == id).unwrap();
        assert_eq!(entry.kyc_status, KycStatus::Pending);
        assert_eq!(
            entry.identity.as_ref().unwrap().legal_last_name.as_deref(),
            Some("Okoro")
        );
    }

    #[test]
    fn resubmission_while_pending_is_rejected() {
        let mut store = developer_store();
        store
            .submit_identity_verification(IdentitySubmission::default())
            .unwrap();

        let err = store
            .submit_identity_verification(IdentitySubmission::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::KycTransition {
                from: KycStatus::Pending,
                ..
            }
        ));
    }
}
