//! Memo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/get/list/update/delete over the single `memo` table.
//! - Stamp `update_time` with the current epoch milliseconds on every write.
//!
//! # Invariants
//! - Listing is ordered by creation timestamp descending, then id descending.
//! - Update and delete of an unknown id fail with `RepoError::NotFound`.

use crate::db::migrations::table_has_column;
use crate::model::memo::{Memo, MemoId};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};

const MEMO_SELECT_SQL: &str = "SELECT
    _id,
    title,
    content,
    timestamp,
    update_time
FROM memo";

const REQUIRED_COLUMNS: [&str; 5] = ["_id", "title", "content", "timestamp", "update_time"];

/// Repository interface for memo CRUD operations.
pub trait MemoRepository {
    /// Inserts one memo and returns its storage id.
    fn insert_memo(&self, title: &str, content: &str) -> RepoResult<MemoId>;
    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>>;
    /// Lists all memos, newest first.
    fn list_memos(&self) -> RepoResult<Vec<Memo>>;
    /// Replaces title and content and refreshes the update time.
    fn update_memo(&self, id: MemoId, title: &str, content: &str) -> RepoResult<()>;
    fn delete_memo(&self, id: MemoId) -> RepoResult<()>;
}

/// SQLite-backed memo repository.
pub struct SqliteMemoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemoRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredColumn` when the connection was not opened through
    ///   `db::open_db*` and lacks the v2 schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        for column in REQUIRED_COLUMNS {
            if !table_has_column(conn, "memo", column)? {
                return Err(RepoError::MissingRequiredColumn {
                    table: "memo",
                    column,
                });
            }
        }
        Ok(Self { conn })
    }
}

impl MemoRepository for SqliteMemoRepository<'_> {
    fn insert_memo(&self, title: &str, content: &str) -> RepoResult<MemoId> {
        self.conn.execute(
            "INSERT INTO memo (title, content, update_time) VALUES (?1, ?2, ?3);",
            params![title, content, now_epoch_ms()],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("event=memo_insert module=repo status=ok memo_id={id}");
        Ok(id)
    }

    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        let memo = self
            .conn
            .query_row(
                &format!("{MEMO_SELECT_SQL} WHERE _id = ?1;"),
                [id],
                parse_memo_row,
            )
            .optional()?;
        Ok(memo)
    }

    fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMO_SELECT_SQL} ORDER BY timestamp DESC, _id DESC;"))?;
        let rows = stmt.query_map([], parse_memo_row)?;
        let mut memos = Vec::new();
        for memo in rows {
            memos.push(memo?);
        }
        Ok(memos)
    }

    fn update_memo(&self, id: MemoId, title: &str, content: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE memo
             SET
                title = ?2,
                content = ?3,
                update_time = ?4
             WHERE _id = ?1;",
            params![id, title, content, now_epoch_ms()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        debug!("event=memo_update module=repo status=ok memo_id={id}");
        Ok(())
    }

    fn delete_memo(&self, id: MemoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM memo WHERE _id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        debug!("event=memo_delete module=repo status=ok memo_id={id}");
        Ok(())
    }
}

fn parse_memo_row(row: &Row<'_>) -> rusqlite::Result<Memo> {
    Ok(Memo {
        id: row.get("_id")?,
        title: row.get::<_, Option<String>>("title")?.unwrap_or_default(),
        content: row.get::<_, Option<String>>("content")?.unwrap_or_default(),
        created_at: row
            .get::<_, Option<String>>("timestamp")?
            .unwrap_or_default(),
        updated_at_ms: row.get("update_time")?,
    })
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
