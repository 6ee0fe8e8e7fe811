//! Memo database bootstrap.
//!
//! # Responsibility
//! - Open `memo.db` (or an in-memory database) and bring the `memo` table to
//!   the latest schema before handing out the connection.
//! - Report schema problems as `DbError` instead of leaving a half-migrated
//!   table behind.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`; version 2 means the
//!   `memo` table has `update_time` in epoch milliseconds.
//! - Migrations for one open run in a single transaction.
//! - Files written by a newer build are refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, DEFAULT_DB_FILE_NAME};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// Connection, pragma or query failure outside a migration script.
    Sqlite(rusqlite::Error),
    /// A migration script failed; `version` is the migration being applied.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// `user_version` is ahead of the newest migration this build knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Migration { version, source } => {
                write!(f, "schema migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "memo database is at schema version {db_version}; this build supports up to {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Migration { source, .. } => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
