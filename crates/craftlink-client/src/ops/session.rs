//! Session lifecycle: login, registration, logout.

use tracing::info;
use uuid::Uuid;

use craftlink_shared::constants::{
    ADMIN_DISPLAY_NAME, ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD, DEFAULT_DEVELOPER_LOCATION,
    DEFAULT_DEVELOPER_TITLE, ROUTE_ROOT,
};
use craftlink_shared::{Account, Developer, Gender, KycStatus, Role, User};

use crate::error::{ClientError, Result};
use crate::events::StoreEvent;
use crate::store::Store;

/// Input to [`Store::register_account`].
///
/// Verification status, wallet balance and the blocked flag are not part of
/// the input: a fresh account always starts unverified, empty and unblocked.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub gender: Option<Gender>,
    // Developer-only extras; ignored for other roles.
    pub title: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<u64>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
            gender: None,
            title: None,
            location: None,
            skills: Vec::new(),
            hourly_rate: None,
            bio: None,
            avatar_url: None,
        }
    }
}

impl Store {
    /// Authenticate and install a session.
    ///
    /// The reserved admin credential pair wins unconditionally.  A developer
    /// login resolves the directory record by case-insensitive email and
    /// falls back to a freshly synthesized profile; any other login
    /// synthesizes a client named after the email local-part.  A blocked
    /// resolved account is refused with no state change.
    pub fn create_session(
        &mut self,
        email: &str,
        role: Option<Role>,
        password: Option<&str>,
    ) -> Result<()> {
        if email == ADMIN_EMAIL && password == Some(ADMIN_PASSWORD) {
            info!("administrator session created");
            return self.install_session(Account::Admin(User {
                id: ADMIN_ID,
                name: ADMIN_DISPLAY_NAME.to_string(),
                email: ADMIN_EMAIL.to_string(),
                phone: String::new(),
                verified: true,
                kyc_status: KycStatus::Unverified,
                wallet_balance: 0,
                blocked: false,
                identity: None,
            }));
        }

        let account = if role == Some(Role::Developer) {
            let existing = self
                .state
                .directory
                .iter()
                .find(|d| d.email.eq_ignore_ascii_case(email));
            match existing {
                Some(dev) => Account::Developer(dev.clone()),
                None => Account::Developer(synthesized_developer(email)),
            }
        } else {
            Account::Client(User {
                id: Uuid::new_v4(),
                name: display_name_from_email(email),
                email: email.to_string(),
                phone: String::new(),
                verified: true,
                kyc_status: KycStatus::Unverified,
                wallet_balance: 0,
                blocked: false,
                identity: None,
            })
        };

        if account.blocked() {
            info!(email, "login refused for blocked account");
            return Err(ClientError::AccountBlocked);
        }

        info!(user = %account.id(), role = ?account.role(), "session created");
        self.install_session(account)
    }

    /// Store a new account and open a session for it.
    ///
    /// A developer registration also inserts the denormalized directory
    /// record with zeroed statistics.
    pub fn register_account(&mut self, reg: Registration) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let role = reg.role;

        let account = match role {
            Role::Developer => {
                let dev = Developer {
                    id,
                    name: reg.name,
                    email: reg.email,
                    phone: reg.phone,
                    gender: reg.gender,
                    title: reg
                        .title
                        .unwrap_or_else(|| DEFAULT_DEVELOPER_TITLE.to_string()),
                    location: reg
                        .location
                        .unwrap_or_else(|| DEFAULT_DEVELOPER_LOCATION.to_string()),
                    skills: reg.skills,
                    hourly_rate: reg.hourly_rate.unwrap_or(0),
                    bio: reg.bio.unwrap_or_default(),
                    avatar_url: reg.avatar_url,
                    available: true,
                    experience_years: 0,
                    completed_projects: 0,
                    rating: 0.0,
                    review_count: 0,
                    premium: false,
                    verified: false,
                    kyc_status: KycStatus::Unverified,
                    wallet_balance: 0,
                    blocked: false,
                    portfolio: Vec::new(),
                    identity: None,
                };
                self.state.directory.push(dev.clone());
                self.persist_directory()?;
                self.emit(StoreEvent::DirectoryChanged);
                Account::Developer(dev)
            }
            Role::Client | Role::Admin => {
                let user = User {
                    id,
                    name: reg.name,
                    email: reg.email,
                    phone: reg.phone,
                    verified: false,
                    kyc_status: KycStatus::Unverified,
                    wallet_balance: 0,
                    blocked: false,
                    identity: None,
                };
                match role {
                    Role::Admin => Account::Admin(user),
                    _ => Account::Client(user),
                }
            }
        };

        info!(user = %id, role = ?role, "account registered");
        self.install_session(account)?;
        Ok(id)
    }

    /// Clear the session and its durable snapshot, then return to the root
    /// view.
    pub fn end_session(&mut self) -> Result<()> {
        self.state.session = None;
        if let Some(ref db) = self.db {
            db.clear_session()?;
        }
        self.emit(StoreEvent::SessionChanged);
        self.navigate(ROUTE_ROOT);
        info!("session ended");
        Ok(())
    }

    fn install_session(&mut self, account: Account) -> Result<()> {
        let home = account.role().home_route();
        self.state.session = Some(account);
        self.persist_session()?;
        self.emit(StoreEvent::SessionChanged);
        self.navigate(home);
        Ok(())
    }
}

/// Default developer profile for an email with no directory record.
fn synthesized_developer(email: &str) -> Developer {
    Developer {
        id: Uuid::new_v4(),
        name: display_name_from_email(email),
        email: email.to_string(),
        phone: String::new(),
        gender: None,
        title: DEFAULT_DEVELOPER_TITLE.to_string(),
        location: DEFAULT_DEVELOPER_LOCATION.to_string(),
        skills: Vec::new(),
        hourly_rate: 0,
        bio: String::new(),
        avatar_url: None,
        available: true,
        experience_years: 0,
        completed_projects: 0,
        rating: 0.0,
        review_count: 0,
        premium: false,
        verified: false,
        kyc_status: KycStatus::Unverified,
        wallet_balance: 0,
        blocked: false,
        portfolio: Vec::new(),
        identity: None,
    }
}

/// Display name synthesized from the email local-part, first letter upper.
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftlink_shared::constants::{ROUTE_ADMIN_HOME, ROUTE_CLIENT_HOME, ROUTE_DEVELOPER_HOME};
    use craftlink_shared::seed;

    #[test]
    fn admin_credentials_grant_admin_session() {
        let mut store = Store::in_memory();
        store
            .create_session(ADMIN_EMAIL, None, Some(ADMIN_PASSWORD))
            .unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(store.current_path(), ROUTE_ADMIN_HOME);
    }

    #[test]
    fn client_login_synthesizes_display_name() {
        let mut store = Store::in_memory();
        store
            .create_session("nadia@example.com", Some(Role::Client), None)
            .unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.name(), "Nadia");
        assert_eq!(session.role(), Role::Client);
        assert_eq!(store.current_path(), ROUTE_CLIENT_HOME);
    }

    #[test]
    fn developer_login_resolves_directory_record_case_insensitively() {
        let mut store = Store::in_memory();
        store
            .create_session("AMARA@example.com", Some(Role::Developer), None)
            .unwrap();

        assert_eq!(store.session().unwrap().id(), seed::DEV_AMARA);
        assert_eq!(store.current_path(), ROUTE_DEVELOPER_HOME);
    }

    #[test]
    fn blocked_account_is_refused_without_state_change() {
        let mut store = Store::in_memory();
        store.state.directory[0].blocked = true;
        let email = store.state.directory[0].email.clone();

        let err = store
            .create_session(&email, Some(Role::Developer), None)
            .unwrap_err();
        assert!(matches!(err, ClientError::AccountBlocked));
        assert!(store.session().is_none());
        assert_eq!(store.current_path(), "/");
    }

    #[test]
    fn registration_forces_fresh_account_defaults() {
        let mut store = Store::in_memory();
        let id = store
            .register_account(Registration::new(
                "Sam",
                "sam@example.com",
                "060000000",
                Role::Developer,
            ))
            .unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.id(), id);
        assert_eq!(session.kyc_status(), KycStatus::Unverified);
        assert_eq!(session.wallet_balance(), 0);
        assert!(!session.blocked());

        let dev = store.directory().iter().find(|d| d.id == id).unwrap();
        assert_eq!(dev.rating, 0.0);
        assert_eq!(dev.review_count, 0);
    }

    #[test]
    fn registration_is_visible_to_subsequent_login() {
        let mut store = Store::in_memory();
        let id = store
            .register_account(Registration::new(
                "Ada",
                "a@x.com",
                String::new(),
                Role::Developer,
            ))
            .unwrap();
        store.end_session().unwrap();

        store
            .create_session("a@x.com", Some(Role::Developer), None)
            .unwrap();
        assert_eq!(store.session().unwrap().id(), id);
        assert_eq!(store.session().unwrap().name(), "Ada");
    }

    #[test]
    fn logout_clears_session_and_returns_to_root() {
        let mut store = Store::in_memory();
        store
            .create_session("c@example.com", Some(Role::Client), None)
            .unwrap();
        store.end_session().unwrap();

        assert!(store.session().is_none());
        assert_eq!(store.current_path(), "/");
    }
}
