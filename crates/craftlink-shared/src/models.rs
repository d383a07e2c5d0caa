//! Domain entities held by the client store and snapshotted to disk.
//!
//! Field names are serialized in camelCase so the persisted JSON matches what
//! the UI layer consumes directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{
    Counterparty, Gender, JobType, KycDocumentType, KycStatus, NotificationKind,
    NotificationTarget, ProposalStatus, Role, TxStatus, TxType,
};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Client or administrator account record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    /// Display name shown across the UI.
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Contact (phone) verification, unrelated to identity verification.
    pub verified: bool,
    pub kyc_status: KycStatus,
    /// Stored balance, kept consistent with the ledger by the wallet ops.
    pub wallet_balance: u64,
    pub blocked: bool,
    /// Real-identity block, populated only through the verification flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<RealIdentity>,
}

/// Real-identity fields collected by the verification flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealIdentity {
    pub legal_last_name: Option<String>,
    pub legal_first_name: Option<String>,
    /// ISO 8601 date of birth.
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub gender: Option<Gender>,
    pub document_type: Option<KycDocumentType>,
    /// Base64 image payloads captured during the flow.
    pub document_image: Option<String>,
    pub selfie_image: Option<String>,
}

/// One entry of a developer's public portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Denormalized directory record for a developer.
///
/// Kept in sync with the corresponding session record by the profile and
/// admin operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub title: String,
    pub location: String,
    pub skills: Vec<String>,
    pub hourly_rate: u64,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub available: bool,
    pub experience_years: u32,
    pub completed_projects: u32,
    /// Average rating, 0 to 5.
    pub rating: f32,
    pub review_count: u32,
    pub premium: bool,
    pub verified: bool,
    pub kyc_status: KycStatus,
    pub wallet_balance: u64,
    pub blocked: bool,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<RealIdentity>,
}

/// The authenticated session record.  The JSON tag mirrors the `role` field
/// of the original user objects, so a persisted session reads back into the
/// right shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Account {
    Client(User),
    Developer(Developer),
    Admin(User),
}

impl Account {
    pub fn id(&self) -> Uuid {
        match self {
            Account::Client(u) | Account::Admin(u) => u.id,
            Account::Developer(d) => d.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Account::Client(_) => Role::Client,
            Account::Developer(_) => Role::Developer,
            Account::Admin(_) => Role::Admin,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Account::Client(u) | Account::Admin(u) => &u.name,
            Account::Developer(d) => &d.name,
        }
    }

    pub fn blocked(&self) -> bool {
        match self {
            Account::Client(u) | Account::Admin(u) => u.blocked,
            Account::Developer(d) => d.blocked,
        }
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        match self {
            Account::Client(u) | Account::Admin(u) => u.blocked = blocked,
            Account::Developer(d) => d.blocked = blocked,
        }
    }

    pub fn kyc_status(&self) -> KycStatus {
        match self {
            Account::Client(u) | Account::Admin(u) => u.kyc_status,
            Account::Developer(d) => d.kyc_status,
        }
    }

    pub fn set_kyc_status(&mut self, status: KycStatus) {
        match self {
            Account::Client(u) | Account::Admin(u) => u.kyc_status = status,
            Account::Developer(d) => d.kyc_status = status,
        }
    }

    pub fn wallet_balance(&self) -> u64 {
        match self {
            Account::Client(u) | Account::Admin(u) => u.wallet_balance,
            Account::Developer(d) => d.wallet_balance,
        }
    }

    pub fn set_wallet_balance(&mut self, balance: u64) {
        match self {
            Account::Client(u) | Account::Admin(u) => u.wallet_balance = balance,
            Account::Developer(d) => d.wallet_balance = balance,
        }
    }

    pub fn identity_mut(&mut self) -> &mut Option<RealIdentity> {
        match self {
            Account::Client(u) | Account::Admin(u) => &mut u.identity,
            Account::Developer(d) => &mut d.identity,
        }
    }

    pub fn as_developer(&self) -> Option<&Developer> {
        match self {
            Account::Developer(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_developer_mut(&mut self) -> Option<&mut Developer> {
        match self {
            Account::Developer(d) => Some(d),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Jobs and proposals
// ---------------------------------------------------------------------------

/// A job posting.  Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    /// Human-readable posting age, e.g. "2 days ago".
    pub posted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
}

/// A developer's bid on a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: Uuid,
    pub job_id: Uuid,
    pub developer_id: Uuid,
    /// Display-name snapshot taken when the proposal was submitted.
    pub developer_name: String,
    pub message: String,
    pub price: u64,
    /// Human-readable submission age.
    pub posted: String,
    pub status: ProposalStatus,
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// Append-only ledger entry.  Balances are derived from completed entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub amount: u64,
    pub from: Counterparty,
    pub to: Counterparty,
    pub created_at: DateTime<Utc>,
    pub status: TxStatus,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Notifications and messaging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub target: NotificationTarget,
    pub kind: NotificationKind,
    pub message: String,
    /// Monotonic: once read, a notification never becomes unread again.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Conversation summary shown in the inbox list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub participant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_avatar: Option<String>,
    pub last_message: String,
    pub unread_count: u32,
}

/// A single chat message.  Messages live in one flat list; the missing
/// per-conversation key is a known modeling gap, kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    /// `None` when sent without an active session.
    pub sender_id: Option<Uuid>,
    /// `None` stands for the fixed placeholder counterpart.
    pub receiver_id: Option<Uuid>,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}
