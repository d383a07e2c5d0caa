use thiserror::Error;
use uuid::Uuid;

use craftlink_shared::{KycStatus, Role};
use craftlink_store::StoreError;

/// Errors produced by store operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Session creation refused for a blocked account.  No state is mutated.
    #[error("This account has been blocked by an administrator")]
    AccountBlocked,

    /// Operation requires an authenticated session.
    #[error("No active session")]
    NoSession,

    /// Operation requires a session of a specific role.
    #[error("Operation requires a {0:?} session")]
    RoleRequired(Role),

    /// Attempted identity-verification transition outside the legal chain.
    #[error("Illegal verification transition: {from:?} -> {to:?}")]
    KycTransition { from: KycStatus, to: KycStatus },

    /// Withdrawal attempted before identity verification.
    #[error("Identity verification is required before withdrawing")]
    KycRequired,

    /// No directory record with the given id.
    #[error("Unknown user: {0}")]
    UnknownUser(Uuid),

    /// Budget range with `min > max`.
    #[error("Budget range is inverted")]
    InvalidBudget,

    /// Monetary amounts must be strictly positive.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Ledger balance too low for the requested withdrawal.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Persistence failure, reported to the caller rather than swallowed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
