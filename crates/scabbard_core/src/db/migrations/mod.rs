//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register memo schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - A column-adding step is skipped when the column already exists.
//! - At the latest version, column-adding steps whose column is missing are
//!   applied again without changing `user_version`.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::{Connection, Transaction};

/// Column that a migration step adds; used to detect already-applied DDL.
#[derive(Debug, Clone, Copy)]
struct AddsColumn {
    table: &'static str,
    column: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
    adds_column: Option<AddsColumn>,
    /// Runs after `sql` (or after skipping it).
    backfill: Option<&'static str>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_memo.sql"),
        adds_column: None,
        backfill: None,
    },
    Migration {
        version: 2,
        sql: include_str!("0002_memo_update_time.sql"),
        adds_column: Some(AddsColumn {
            table: "memo",
            column: "update_time",
        }),
        backfill: Some(include_str!("0002_memo_update_time_backfill.sql")),
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return repair_missing_columns(conn);
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }
        apply_one(&tx, migration)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        current_version, latest
    );
    Ok(())
}

/// Re-applies column-adding migrations whose column is absent even though
/// `user_version` claims they ran.
///
/// Older builds bumped `user_version` to 2 after a failed `update_time` ALTER,
/// leaving the column missing.
fn repair_missing_columns(conn: &mut Connection) -> DbResult<()> {
    let mut missing = Vec::new();
    for migration in MIGRATIONS {
        if let Some(target) = migration.adds_column {
            if !table_has_column(conn, target.table, target.column)? {
                missing.push(migration);
            }
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in &missing {
        apply_steps(&tx, migration)?;
    }
    tx.commit()?;

    info!(
        "event=db_repair module=db status=ok repaired_versions={:?}",
        missing.iter().map(|m| m.version).collect::<Vec<_>>()
    );
    Ok(())
}

fn apply_one(tx: &Transaction<'_>, migration: &Migration) -> DbResult<()> {
    apply_steps(tx, migration)?;
    tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    Ok(())
}

fn apply_steps(tx: &Transaction<'_>, migration: &Migration) -> DbResult<()> {
    let already_applied = match migration.adds_column {
        Some(target) => table_has_column(tx, target.table, target.column)?,
        None => false,
    };

    if already_applied {
        debug!(
            "event=db_migrate_step module=db status=skipped version={} reason=column_exists",
            migration.version
        );
    } else {
        tx.execute_batch(migration.sql)
            .map_err(|source| DbError::Migration {
                version: migration.version,
                source,
            })?;
    }

    if let Some(backfill) = migration.backfill {
        tx.execute_batch(backfill)
            .map_err(|source| DbError::Migration {
                version: migration.version,
                source,
            })?;
    }
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Returns whether `table` currently has a column named `column`.
pub(crate) fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
