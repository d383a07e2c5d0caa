//! Fixed literals shared by the store and client crates.

use uuid::Uuid;

/// Snapshot keys in the durable store.  One JSON blob per slice.
pub const SNAPSHOT_SESSION: &str = "craftlink.session";
pub const SNAPSHOT_DIRECTORY: &str = "craftlink.directory";
pub const SNAPSHOT_JOBS: &str = "craftlink.jobs";
pub const SNAPSHOT_LEDGER: &str = "craftlink.ledger";

/// Reserved credential pair granting an administrator session unconditionally.
pub const ADMIN_EMAIL: &str = "admin@craftlink.app";
pub const ADMIN_PASSWORD: &str = "atelier-2024";
pub const ADMIN_DISPLAY_NAME: &str = "Administrator";

/// Stable id of the reserved administrator account.
pub const ADMIN_ID: Uuid = Uuid::from_u128(0xAD);

/// Fixed notification messages emitted when an identity review is resolved.
pub const KYC_APPROVED_MESSAGE: &str =
    "Your identity has been verified. Your profile now carries the verified badge.";
pub const KYC_REJECTED_MESSAGE: &str =
    "Your identity verification was rejected. Please check your documents and try again.";

/// Navigation routes.
pub const ROUTE_ROOT: &str = "/";
pub const ROUTE_CLIENT_HOME: &str = "/dashboard";
pub const ROUTE_DEVELOPER_HOME: &str = "/jobs";
pub const ROUTE_ADMIN_HOME: &str = "/admin";

/// Platform commission charged on every payment, in percent.
pub const PLATFORM_FEE_PERCENT: u64 = 8;

/// Defaults applied to a freshly synthesized developer profile.
pub const DEFAULT_DEVELOPER_TITLE: &str = "New developer";
pub const DEFAULT_DEVELOPER_LOCATION: &str = "Remote";
