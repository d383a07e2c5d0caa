//! Typed snapshot helpers, one pair per persisted slice.
//!
//! Each slice is a single JSON blob keyed by a fixed name from
//! [`craftlink_shared::constants`].  Saving reports its outcome; loading
//! never fails — an absent or unparseable blob falls back to the seed
//! dataset (or `None` for the session) with a warning.

use serde::de::DeserializeOwned;
use serde::Serialize;

use craftlink_shared::constants::{
    SNAPSHOT_DIRECTORY, SNAPSHOT_JOBS, SNAPSHOT_LEDGER, SNAPSHOT_SESSION,
};
use craftlink_shared::seed;
use craftlink_shared::{Account, Developer, Job, Transaction};

use crate::database::Database;
use crate::error::Result;

impl Database {
    // ------------------------------------------------------------------
    // Raw slice access
    // ------------------------------------------------------------------

    fn read_slice(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT json FROM snapshots WHERE key = ?1")?;
        let mut rows = stmt.query_map([key], |row| row.get::<_, String>(0))?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    fn write_slice(&self, key: &str, json: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO snapshots (key, json, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, json, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn delete_slice(&self, key: &str) -> Result<()> {
        self.conn()
            .execute("DELETE FROM snapshots WHERE key = ?1", [key])?;
        Ok(())
    }

    fn save_slice<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.write_slice(key, &json)?;
        tracing::debug!(key, bytes = json.len(), "snapshot saved");
        Ok(())
    }

    /// Load a slice, falling back to `fallback()` when the row is absent or
    /// its JSON no longer parses.
    fn load_slice_or<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.read_slice(key) {
            Ok(Some(json)) => json,
            Ok(None) => return fallback(),
            Err(e) => {
                tracing::warn!(key, error = %e, "snapshot read failed, using defaults");
                return fallback();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "snapshot unreadable, using defaults");
                fallback()
            }
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Persist the current session (`null` when logged out).
    pub fn save_session(&self, session: &Option<Account>) -> Result<()> {
        self.save_slice(SNAPSHOT_SESSION, session)
    }

    /// Rehydrate the session.  Absent or corrupt means logged out.
    pub fn load_session(&self) -> Option<Account> {
        self.load_slice_or(SNAPSHOT_SESSION, || None)
    }

    /// Drop the durable session snapshot (logout).
    pub fn clear_session(&self) -> Result<()> {
        self.delete_slice(SNAPSHOT_SESSION)
    }

    // ------------------------------------------------------------------
    // Directory, jobs, ledger
    // ------------------------------------------------------------------

    pub fn save_directory(&self, directory: &[Developer]) -> Result<()> {
        self.save_slice(SNAPSHOT_DIRECTORY, &directory)
    }

    pub fn load_directory(&self) -> Vec<Developer> {
        self.load_slice_or(SNAPSHOT_DIRECTORY, seed::directory)
    }

    pub fn save_jobs(&self, jobs: &[Job]) -> Result<()> {
        self.save_slice(SNAPSHOT_JOBS, &jobs)
    }

    pub fn load_jobs(&self) -> Vec<Job> {
        self.load_slice_or(SNAPSHOT_JOBS, seed::jobs)
    }

    pub fn save_ledger(&self, ledger: &[Transaction]) -> Result<()> {
        self.save_slice(SNAPSHOT_LEDGER, &ledger)
    }

    pub fn load_ledger(&self) -> Vec<Transaction> {
        self.load_slice_or(SNAPSHOT_LEDGER, seed::ledger)
    }
}
