//! Store operations, grouped by domain.
//!
//! Each sub-module extends [`Store`](crate::Store) with the mutations and
//! derived views for one slice of the application.  Every mutation applies
//! in memory first, then mirrors the touched slices to the durable store
//! and broadcasts the matching [`StoreEvent`](crate::StoreEvent).

pub mod admin;
pub mod jobs;
pub mod messaging;
pub mod notifications;
pub mod profile;
pub mod session;
pub mod wallet;
