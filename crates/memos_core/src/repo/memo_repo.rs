//! Memo rows and their lifecycle.
//!
//! # Responsibility
//! - CRUD over `memo` rows, scoped by creator.
//! - Soft delete through `row_status`, hard delete through row removal.
//!
//! # Invariants
//! - Every query is constrained to the caller's `creator_id`.
//! - Lists are ordered by `created_ts DESC, id ASC`.
//! - Content updates bump `updated_ts`; status changes do too.

use crate::model::memo::{MemoId, RawMemo, RowStatus};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const MEMO_SELECT_SQL: &str = "SELECT
    id,
    creator_id,
    content,
    row_status,
    created_ts,
    updated_ts
FROM memo";

/// SQLite-backed memo repository.
pub struct SqliteMemoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists one creator's memos in the given row status, newest first.
    pub fn list_memos(&self, creator_id: i64, row_status: RowStatus) -> RepoResult<Vec<RawMemo>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEMO_SELECT_SQL}
             WHERE creator_id = ?1
               AND row_status = ?2
             ORDER BY created_ts DESC, id ASC;"
        ))?;
        let mut rows = stmt.query(params![creator_id, row_status.as_str()])?;
        let mut memos = Vec::new();
        while let Some(row) = rows.next()? {
            memos.push(parse_memo_row(row)?);
        }
        Ok(memos)
    }

    /// Gets one memo by id regardless of row status.
    pub fn get_memo(&self, creator_id: i64, id: &str) -> RepoResult<Option<RawMemo>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEMO_SELECT_SQL}
             WHERE id = ?1
               AND creator_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![id, creator_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_memo_row(row)?));
        }
        Ok(None)
    }

    /// Creates a memo with a generated id and current timestamps.
    pub fn create_memo(&self, creator_id: i64, content: &str) -> RepoResult<RawMemo> {
        let id: MemoId = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO memo (id, creator_id, content) VALUES (?1, ?2, ?3);",
            params![id.as_str(), creator_id, content],
        )?;
        self.read_back(creator_id, &id)
    }

    /// Inserts a memo with caller-provided identity and timestamps.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn insert_memo(&self, memo: &RawMemo) -> RepoResult<()> {
        if memo.id.trim().is_empty() {
            return Err(RepoError::InvalidInput("memo id cannot be empty".to_string()));
        }
        self.conn.execute(
            "INSERT INTO memo (id, creator_id, content, row_status, created_ts, updated_ts)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                memo.id.as_str(),
                memo.creator_id,
                memo.content.as_str(),
                memo.row_status.as_str(),
                memo.created_ts,
                memo.updated_ts,
            ],
        )?;
        Ok(())
    }

    /// Replaces memo content and returns the updated row.
    pub fn update_content(&self, creator_id: i64, id: &str, content: &str) -> RepoResult<RawMemo> {
        let changed = self.conn.execute(
            "UPDATE memo
             SET
                content = ?3,
                updated_ts = MAX(updated_ts, CAST(strftime('%s', 'now') AS INTEGER))
             WHERE id = ?1
               AND creator_id = ?2;",
            params![id, creator_id, content],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(format!("memo {id}")));
        }
        self.read_back(creator_id, id)
    }

    /// Moves a memo between `NORMAL` and `HIDDEN`.
    pub fn set_row_status(&self, creator_id: i64, id: &str, row_status: RowStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE memo
             SET
                row_status = ?3,
                updated_ts = MAX(updated_ts, CAST(strftime('%s', 'now') AS INTEGER))
             WHERE id = ?1
               AND creator_id = ?2;",
            params![id, creator_id, row_status.as_str()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(format!("memo {id}")));
        }
        Ok(())
    }

    /// Removes a memo row permanently.
    pub fn delete_memo(&self, creator_id: i64, id: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM memo WHERE id = ?1 AND creator_id = ?2;",
            params![id, creator_id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(format!("memo {id}")));
        }
        Ok(())
    }

    /// Counts memos per row status for one creator.
    pub fn count_memos(&self, creator_id: i64, row_status: RowStatus) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM memo WHERE creator_id = ?1 AND row_status = ?2;",
            params![creator_id, row_status.as_str()],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative memo count `{count}`")))
    }

    fn read_back(&self, creator_id: i64, id: &str) -> RepoResult<RawMemo> {
        self.get_memo(creator_id, id)?
            .ok_or_else(|| RepoError::NotFound(format!("memo {id}")))
    }
}

fn parse_memo_row(row: &Row<'_>) -> RepoResult<RawMemo> {
    let status_text: String = row.get("row_status")?;
    let row_status = RowStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid row status `{status_text}` in memo.row_status"
        ))
    })?;

    Ok(RawMemo {
        id: row.get("id")?,
        creator_id: row.get("creator_id")?,
        content: row.get("content")?,
        created_ts: row.get("created_ts")?,
        updated_ts: row.get("updated_ts")?,
        row_status,
    })
}
