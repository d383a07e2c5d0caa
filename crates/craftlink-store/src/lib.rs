//! # craftlink-store
//!
//! Durable local persistence for the Craftlink client core.
//!
//! The store mirrors selected slices of the in-memory domain state — session,
//! developer directory, job board, transaction ledger — as string-keyed JSON
//! snapshots inside a small SQLite database.  Writes report their outcome;
//! reads fall back to the fixed seed dataset when a snapshot is absent or
//! fails to parse.

pub mod database;
pub mod migrations;
pub mod snapshots;

mod error;

pub use database::Database;
pub use error::StoreError;
