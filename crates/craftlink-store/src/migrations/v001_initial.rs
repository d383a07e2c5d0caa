//! v001 -- Initial schema creation.
//!
//! Creates the single `snapshots` table.  Each row is one JSON-serialized
//! slice of the in-memory state, keyed by a fixed name.  The blob contents
//! carry no version field of their own; an unreadable blob is simply
//! defaulted at load time.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS snapshots (
    key        TEXT PRIMARY KEY NOT NULL,   -- fixed slice name
    json       TEXT NOT NULL,               -- serialized slice contents
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
