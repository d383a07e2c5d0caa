use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::constants;

// ---------------------------------------------------------------------------
// Roles and statuses
// ---------------------------------------------------------------------------

/// The three account roles known to the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Developer,
    Admin,
}

impl Role {
    /// Default view a freshly authenticated session of this role lands on.
    pub fn home_route(self) -> &'static str {
        match self {
            Role::Client => constants::ROUTE_CLIENT_HOME,
            Role::Developer => constants::ROUTE_DEVELOPER_HOME,
            Role::Admin => constants::ROUTE_ADMIN_HOME,
        }
    }
}

/// Identity-verification state of an account.
///
/// Legal transitions form a single chain: `Unverified -> Pending` (user
/// submission) and `Pending -> Verified | Rejected` (administrative review).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Unverified,
    Pending,
    Verified,
    Rejected,
}

impl KycStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition(self, next: KycStatus) -> bool {
        matches!(
            (self, next),
            (KycStatus::Unverified, KycStatus::Pending)
                | (KycStatus::Pending, KycStatus::Verified)
                | (KycStatus::Pending, KycStatus::Rejected)
        )
    }
}

/// Outcome of an administrative identity review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycDecision {
    Approve,
    Reject,
}

impl KycDecision {
    pub fn resulting_status(self) -> KycStatus {
        match self {
            KycDecision::Approve => KycStatus::Verified,
            KycDecision::Reject => KycStatus::Rejected,
        }
    }
}

/// Identity document accepted for verification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum KycDocumentType {
    NationalId,
    Passport,
    ResidencePermit,
    StudentCard,
    TaxNumber,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    M,
    F,
}

/// Engagement type of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Freelance,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Deposit,
    Payment,
    Withdrawal,
    Fee,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

// ---------------------------------------------------------------------------
// Sentinel-bearing references
// ---------------------------------------------------------------------------

/// Error returned when a sentinel string cannot be parsed back into a typed
/// reference.
#[derive(Error, Debug)]
#[error("invalid party reference: {0}")]
pub struct ParsePartyError(String);

/// One side of a ledger entry: a platform user, the platform itself, or an
/// external payment rail.  Serialized as the user's uuid or the literal
/// `system` / `external` sentinel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum Counterparty {
    User(Uuid),
    System,
    External,
}

impl From<Counterparty> for String {
    fn from(p: Counterparty) -> Self {
        match p {
            Counterparty::User(id) => id.to_string(),
            Counterparty::System => "system".to_string(),
            Counterparty::External => "external".to_string(),
        }
    }
}

impl TryFrom<String> for Counterparty {
    type Error = ParsePartyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "system" => Ok(Counterparty::System),
            "external" => Ok(Counterparty::External),
            other => Uuid::parse_str(other)
                .map(Counterparty::User)
                .map_err(|_| ParsePartyError(s)),
        }
    }
}

/// Addressee of a notification: one user or the literal `all` broadcast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum NotificationTarget {
    User(Uuid),
    All,
}

impl NotificationTarget {
    /// Whether a notification with this target is visible to `user_id`.
    pub fn addresses(self, user_id: Uuid) -> bool {
        match self {
            NotificationTarget::User(id) => id == user_id,
            NotificationTarget::All => true,
        }
    }
}

impl From<NotificationTarget> for String {
    fn from(t: NotificationTarget) -> Self {
        match t {
            NotificationTarget::User(id) => id.to_string(),
            NotificationTarget::All => "all".to_string(),
        }
    }
}

impl TryFrom<String> for NotificationTarget {
    type Error = ParsePartyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "all" => Ok(NotificationTarget::All),
            other => Uuid::parse_str(other)
                .map(NotificationTarget::User)
                .map_err(|_| ParsePartyError(s)),
        }
    }
}
