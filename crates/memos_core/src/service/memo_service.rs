//! Memo use-case service.
//!
//! # Responsibility
//! - Call the remote memo API and convert wire memos into store memos.
//! - Dispatch list-level results into the owned `MemoStore`.
//! - Derive tags and backlinks from the current store state.
//!
//! # Invariants
//! - `create_memo`/`update_memo` never dispatch; callers apply the result.
//! - List fetches require a signed-in user; absence yields `Ok(None)`.
//! - Only the most recently started list fetch may replace the memo list.
//! - Remote failures propagate unchanged; no retry, no local rollback.

use crate::api::{ApiError, MemoApi};
use crate::model::memo::{Memo, MemoId, MemoPatch, RawMemo};
use crate::service::tags::collect_tags;
use crate::session::SessionProvider;
use crate::store::action::MemoAction;
use crate::store::memo_store::MemoStore;
use crate::store::reducer::MemoState;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for memo use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Remote API reports the target memo does not exist.
    MemoNotFound(MemoId),
    /// Any other remote API failure.
    Api(ApiError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemoNotFound(id) => write!(f, "memo not found: {id}"),
            Self::Api(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MemoNotFound(_) => None,
            Self::Api(err) => Some(err),
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::NotFound(id) => Self::MemoNotFound(id),
            other => Self::Api(other),
        }
    }
}

/// Ticket identifying one started list fetch.
///
/// A ticket is current until another fetch starts or the list is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Bridge between the remote memo API and the memo store.
pub struct MemoService<A: MemoApi, S: SessionProvider> {
    api: A,
    session: S,
    store: MemoStore,
    initialized: bool,
    fetch_generation: u64,
}

impl<A: MemoApi, S: SessionProvider> MemoService<A, S> {
    /// Creates a service with an empty store.
    pub fn new(api: A, session: S) -> Self {
        Self::with_store(api, session, MemoStore::new())
    }

    /// Creates a service around an existing store (e.g. with subscribers).
    pub fn with_store(api: A, session: S, store: MemoStore) -> Self {
        Self {
            api,
            session,
            store,
            initialized: false,
            fetch_generation: 0,
        }
    }

    pub fn store(&self) -> &MemoStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MemoStore {
        &mut self.store
    }

    pub fn state(&self) -> &MemoState {
        self.store.state()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Whether a list fetch has succeeded at least once.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Fetches all active memos and replaces the store list.
    ///
    /// Returns `Ok(None)` without calling the API when nobody is signed in.
    pub fn fetch_all_memos(&mut self) -> ServiceResult<Option<Vec<Memo>>> {
        if self.session.current_user().is_none() {
            warn!("event=memo_fetch module=memo_service status=skipped reason=no_session");
            return Ok(None);
        }

        let ticket = self.begin_memos_fetch();
        let raw = self.api.get_my_memos().map_err(|err| {
            error!("event=memo_fetch module=memo_service status=error error={err}");
            err
        })?;
        let memos = convert_memos(raw);
        self.initialized = true;
        self.complete_memos_fetch(ticket, memos.clone());
        info!(
            "event=memo_fetch module=memo_service status=ok count={}",
            memos.len()
        );
        Ok(Some(memos))
    }

    /// Fetches soft-deleted memos without touching the store.
    pub fn fetch_deleted_memos(&self) -> ServiceResult<Option<Vec<Memo>>> {
        if self.session.current_user().is_none() {
            warn!("event=memo_fetch_deleted module=memo_service status=skipped reason=no_session");
            return Ok(None);
        }

        let raw = self.api.get_my_deleted_memos().map_err(|err| {
            error!("event=memo_fetch_deleted module=memo_service status=error error={err}");
            err
        })?;
        let memos = convert_memos(raw);
        info!(
            "event=memo_fetch_deleted module=memo_service status=ok count={}",
            memos.len()
        );
        Ok(Some(memos))
    }

    /// Starts a list fetch and invalidates every earlier ticket.
    pub fn begin_memos_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        FetchTicket(self.fetch_generation)
    }

    /// Applies a fetched list if `ticket` is still current.
    ///
    /// Returns `false` and leaves the store untouched for stale tickets.
    pub fn complete_memos_fetch(&mut self, ticket: FetchTicket, memos: Vec<Memo>) -> bool {
        if ticket.0 != self.fetch_generation {
            warn!(
                "event=memo_fetch_apply module=memo_service status=stale ticket={} current={}",
                ticket.0, self.fetch_generation
            );
            return false;
        }

        self.initialized = true;
        self.store.dispatch(MemoAction::SetMemos { memos });
        true
    }

    /// Creates a memo remotely and returns it without dispatching.
    pub fn create_memo(&self, text: &str) -> ServiceResult<Memo> {
        let raw = self.api.create_memo(text).map_err(|err| {
            error!("event=memo_create module=memo_service status=error error={err}");
            err
        })?;
        info!("event=memo_create module=memo_service status=ok memo_id={}", raw.id);
        Ok(Memo::from_raw(raw))
    }

    /// Updates memo text remotely and returns it without dispatching.
    pub fn update_memo(&self, id: &str, text: &str) -> ServiceResult<Memo> {
        let raw = self.api.update_memo(id, text).map_err(|err| {
            error!("event=memo_update module=memo_service status=error memo_id={id} error={err}");
            err
        })?;
        info!("event=memo_update module=memo_service status=ok memo_id={id}");
        Ok(Memo::from_raw(raw))
    }

    /// Soft-deletes a memo remotely, then removes it from the active list.
    pub fn hide_memo_by_id(&mut self, id: &str) -> ServiceResult<()> {
        self.api.hide_memo(id).map_err(|err| {
            error!("event=memo_hide module=memo_service status=error memo_id={id} error={err}");
            err
        })?;
        self.store.dispatch(MemoAction::DeleteMemoById { id: id.to_string() });
        info!("event=memo_hide module=memo_service status=ok memo_id={id}");
        Ok(())
    }

    /// Restores a memo remotely, then resyncs the whole list.
    ///
    /// Returns the refetched list, or `Ok(None)` when the session ended.
    pub fn restore_memo_by_id(&mut self, id: &str) -> ServiceResult<Option<Vec<Memo>>> {
        self.api.restore_memo(id).map_err(|err| {
            error!("event=memo_restore module=memo_service status=error memo_id={id} error={err}");
            err
        })?;
        info!("event=memo_restore module=memo_service status=ok memo_id={id}");
        self.clear_memos();
        self.fetch_all_memos()
    }

    /// Permanently deletes a memo remotely. The store is left untouched.
    pub fn delete_memo_by_id(&self, id: &str) -> ServiceResult<()> {
        self.api.delete_memo(id).map_err(|err| {
            error!("event=memo_delete module=memo_service status=error memo_id={id} error={err}");
            err
        })?;
        info!("event=memo_delete module=memo_service status=ok memo_id={id}");
        Ok(())
    }

    /// Recomputes tags from every memo in the store and dispatches them.
    pub fn update_tags_state(&mut self) -> Vec<String> {
        let contents = self.store.state().memos.iter().map(|memo| memo.content.as_str());
        let tags = collect_tags(contents);
        self.store.dispatch(MemoAction::SetTags { tags: tags.clone() });
        tags
    }

    /// Returns memos whose content mentions `id`.
    pub fn linked_memos(&self, id: &str) -> Vec<Memo> {
        self.store.linked_memos(id).into_iter().cloned().collect()
    }

    /// Inserts (or replaces by id) one memo in the store.
    pub fn push_memo(&mut self, memo: Memo) {
        self.store.dispatch(MemoAction::InsertMemo { memo });
    }

    /// Merges edited fields onto the stored memo with the same id.
    pub fn edit_memo(&mut self, patch: impl Into<MemoPatch>) {
        self.store.dispatch(MemoAction::EditMemo(patch.into()));
    }

    pub fn memo_by_id(&self, id: &str) -> Option<&Memo> {
        self.store.memo_by_id(id)
    }

    /// Empties the memo list and invalidates in-flight fetch tickets.
    pub fn clear_memos(&mut self) {
        self.fetch_generation += 1;
        self.store.dispatch(MemoAction::SetMemos { memos: Vec::new() });
    }
}

fn convert_memos(raw: Vec<RawMemo>) -> Vec<Memo> {
    raw.into_iter().map(Memo::from_raw).collect()
}
