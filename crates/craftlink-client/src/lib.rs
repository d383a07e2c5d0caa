//! # craftlink-client
//!
//! Client-side domain core of the Craftlink marketplace.
//!
//! The [`Store`] is the single source of truth for all mutable application
//! data: the authenticated session, the developer directory, job postings,
//! proposals, the transaction ledger, notifications and messages.  Screens
//! read through its typed views, mutate through the operations in [`ops`],
//! and re-render by subscribing to [`StoreEvent`]s.  Selected slices are
//! mirrored to `craftlink-store` after every mutation.

pub mod assist;
pub mod events;
pub mod nav;
pub mod ops;
pub mod state;
pub mod store;

mod error;

pub use error::ClientError;
pub use events::StoreEvent;
pub use store::Store;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide tracing subscriber.
///
/// Called once by the host shell before the store is opened.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("craftlink_client=debug,craftlink_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
