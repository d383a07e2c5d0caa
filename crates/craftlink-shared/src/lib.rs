//! # craftlink-shared
//!
//! Domain model for the Craftlink marketplace client core.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be snapshotted
//! to the local store or handed to a UI layer unchanged.  The crate also owns
//! the fixed seed dataset used when no durable snapshot exists yet.

pub mod constants;
pub mod models;
pub mod seed;
pub mod types;

pub use models::*;
pub use types::*;
