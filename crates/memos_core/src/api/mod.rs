//! Remote memo API collaborator.
//!
//! # Responsibility
//! - Define the contract the service layer calls for memo persistence.
//! - Ship a SQLite-backed implementation for local and test use.
//!
//! # Invariants
//! - Implementations return wire-shaped `RawMemo` values; timestamp
//!   conversion is the service's job.
//! - Every call is scoped to one signed-in creator.

use crate::model::memo::{MemoId, RawMemo};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by a `MemoApi` implementation.
#[derive(Debug)]
pub enum ApiError {
    /// Target memo does not exist for the current creator.
    NotFound(MemoId),
    /// Request was rejected because no valid credentials were presented.
    Unauthorized,
    /// Backend could not be reached or answered with an unexpected failure.
    Unavailable(String),
    /// Local backend storage failure.
    Repo(RepoError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "memo not found: {id}"),
            Self::Unauthorized => write!(f, "memo api rejected the request as unauthorized"),
            Self::Unavailable(message) => write!(f, "memo api unavailable: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Remote memo endpoints used by `MemoService`.
pub trait MemoApi {
    /// Lists the caller's active memos.
    fn get_my_memos(&self) -> ApiResult<Vec<RawMemo>>;
    /// Lists the caller's hidden (soft-deleted) memos.
    fn get_my_deleted_memos(&self) -> ApiResult<Vec<RawMemo>>;
    /// Creates one memo from text.
    fn create_memo(&self, content: &str) -> ApiResult<RawMemo>;
    /// Replaces one memo's text.
    fn update_memo(&self, id: &str, content: &str) -> ApiResult<RawMemo>;
    /// Soft-deletes one memo.
    fn hide_memo(&self, id: &str) -> ApiResult<()>;
    /// Reactivates one soft-deleted memo.
    fn restore_memo(&self, id: &str) -> ApiResult<()>;
    /// Permanently removes one memo.
    fn delete_memo(&self, id: &str) -> ApiResult<()>;
}

impl<T: MemoApi + ?Sized> MemoApi for &T {
    fn get_my_memos(&self) -> ApiResult<Vec<RawMemo>> {
        (**self).get_my_memos()
    }

    fn get_my_deleted_memos(&self) -> ApiResult<Vec<RawMemo>> {
        (**self).get_my_deleted_memos()
    }

    fn create_memo(&self, content: &str) -> ApiResult<RawMemo> {
        (**self).create_memo(content)
    }

    fn update_memo(&self, id: &str, content: &str) -> ApiResult<RawMemo> {
        (**self).update_memo(id, content)
    }

    fn hide_memo(&self, id: &str) -> ApiResult<()> {
        (**self).hide_memo(id)
    }

    fn restore_memo(&self, id: &str) -> ApiResult<()> {
        (**self).restore_memo(id)
    }

    fn delete_memo(&self, id: &str) -> ApiResult<()> {
        (**self).delete_memo(id)
    }
}
