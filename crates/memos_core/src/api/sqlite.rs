//! `MemoApi` backed by the local SQLite schema.
//!
//! Mirrors the server contract: lists are newest first, hide/restore flip
//! `row_status`, delete removes the row, unknown ids are `NotFound`.

use crate::api::{ApiError, ApiResult, MemoApi};
use crate::model::memo::{RawMemo, RowStatus};
use crate::model::user::User;
use crate::repo::memo_repo::SqliteMemoRepository;
use crate::repo::RepoError;
use rusqlite::Connection;

/// Local memo API scoped to one creator.
pub struct SqliteMemoApi<'conn> {
    repo: SqliteMemoRepository<'conn>,
    creator_id: i64,
}

impl<'conn> SqliteMemoApi<'conn> {
    /// Creates an API bound to `user`'s memos.
    pub fn new(conn: &'conn Connection, user: &User) -> Self {
        Self {
            repo: SqliteMemoRepository::new(conn),
            creator_id: user.id,
        }
    }

    /// Returns the creator this API is scoped to.
    pub fn creator_id(&self) -> i64 {
        self.creator_id
    }
}

impl MemoApi for SqliteMemoApi<'_> {
    fn get_my_memos(&self) -> ApiResult<Vec<RawMemo>> {
        Ok(self.repo.list_memos(self.creator_id, RowStatus::Normal)?)
    }

    fn get_my_deleted_memos(&self) -> ApiResult<Vec<RawMemo>> {
        Ok(self.repo.list_memos(self.creator_id, RowStatus::Hidden)?)
    }

    fn create_memo(&self, content: &str) -> ApiResult<RawMemo> {
        Ok(self.repo.create_memo(self.creator_id, content)?)
    }

    fn update_memo(&self, id: &str, content: &str) -> ApiResult<RawMemo> {
        self.repo
            .update_content(self.creator_id, id, content)
            .map_err(|err| not_found_as_api(err, id))
    }

    fn hide_memo(&self, id: &str) -> ApiResult<()> {
        self.repo
            .set_row_status(self.creator_id, id, RowStatus::Hidden)
            .map_err(|err| not_found_as_api(err, id))
    }

    fn restore_memo(&self, id: &str) -> ApiResult<()> {
        self.repo
            .set_row_status(self.creator_id, id, RowStatus::Normal)
            .map_err(|err| not_found_as_api(err, id))
    }

    fn delete_memo(&self, id: &str) -> ApiResult<()> {
        self.repo
            .delete_memo(self.creator_id, id)
            .map_err(|err| not_found_as_api(err, id))
    }
}

fn not_found_as_api(err: RepoError, id: &str) -> ApiError {
    match err {
        RepoError::NotFound(_) => ApiError::NotFound(id.to_string()),
        other => ApiError::Repo(other),
    }
}
