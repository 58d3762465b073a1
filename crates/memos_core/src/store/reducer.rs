//! Pure state transition for the memo store.
//!
//! # Invariants
//! - `reduce` performs no I/O and never fails.
//! - Sorting is stable; on equal `created_at` the earlier list position wins.
//! - Deduplication keeps the first entry per id in sorted order.

use crate::model::memo::Memo;
use crate::store::action::MemoAction;
use serde::Serialize;
use std::collections::HashSet;

/// Snapshot of everything the store holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoState {
    /// Active memos, newest first, unique by id.
    pub memos: Vec<Memo>,
    /// Tags derived from memo contents.
    pub tags: Vec<String>,
}

/// Applies one action and returns the next state.
pub fn reduce(state: MemoState, action: MemoAction) -> MemoState {
    match action {
        MemoAction::SetMemos { memos } => MemoState {
            memos: sort_and_dedupe(memos),
            ..state
        },
        MemoAction::SetTags { tags } => MemoState { tags, ..state },
        MemoAction::InsertMemo { memo } => {
            let MemoState { memos, tags } = state;
            let mut next = Vec::with_capacity(memos.len() + 1);
            next.push(memo);
            next.extend(memos);
            MemoState {
                memos: sort_and_dedupe(next),
                tags,
            }
        }
        MemoAction::DeleteMemoById { id } => {
            let MemoState { mut memos, tags } = state;
            memos.retain(|memo| memo.id != id);
            MemoState { memos, tags }
        }
        MemoAction::EditMemo(patch) => {
            let MemoState { mut memos, tags } = state;
            for memo in memos.iter_mut().filter(|memo| memo.id == patch.id) {
                memo.apply_patch(&patch);
            }
            MemoState { memos, tags }
        }
        MemoAction::Unknown => state,
    }
}

/// Sorts memos newest first and drops repeated ids.
///
/// Orders on the wire `created_ts` so that values outside chrono's range,
/// which all clamp to the same `created_at`, keep their relative order.
pub fn sort_and_dedupe(mut memos: Vec<Memo>) -> Vec<Memo> {
    memos.sort_by(|left, right| right.created_ts.cmp(&left.created_ts));
    let mut seen = HashSet::with_capacity(memos.len());
    memos.retain(|memo| seen.insert(memo.id.clone()));
    memos
}

#[cfg(test)]
mod tests {
    use super::{reduce, sort_and_dedupe, MemoState};
    use crate::model::memo::{Memo, RawMemo, RowStatus};
    use crate::store::action::MemoAction;

    fn memo(id: &str, created_ts: i64, content: &str) -> Memo {
        Memo::from_raw(RawMemo {
            id: id.to_string(),
            creator_id: 1,
            content: content.to_string(),
            created_ts,
            updated_ts: created_ts,
            row_status: RowStatus::Normal,
        })
    }

    fn ids(state: &MemoState) -> Vec<&str> {
        state.memos.iter().map(|memo| memo.id.as_str()).collect()
    }

    #[test]
    fn set_memos_orders_newest_first() {
        let state = reduce(
            MemoState::default(),
            MemoAction::SetMemos {
                memos: vec![memo("1", 100, "a"), memo("2", 200, "b")],
            },
        );
        assert_eq!(ids(&state), vec!["2", "1"]);
    }

    #[test]
    fn insert_lands_between_older_and_newer() {
        let state = reduce(
            MemoState::default(),
            MemoAction::SetMemos {
                memos: vec![memo("1", 100, "a"), memo("2", 200, "b")],
            },
        );
        let state = reduce(
            state,
            MemoAction::InsertMemo {
                memo: memo("3", 150, "c"),
            },
        );
        assert_eq!(ids(&state), vec!["2", "3", "1"]);
    }

    #[test]
    fn sort_and_dedupe_keeps_first_in_sorted_order() {
        let memos = sort_and_dedupe(vec![
            memo("1", 100, "old"),
            memo("1", 300, "new"),
            memo("2", 200, "other"),
        ]);
        assert_eq!(memos.len(), 2);
        assert_eq!(memos[0].content, "new");
        assert_eq!(memos[1].id, "2");
    }

    #[test]
    fn out_of_range_timestamps_keep_their_order() {
        let memos = sort_and_dedupe(vec![
            memo("far", 10_000_000_000_000, "a"),
            memo("farther", 20_000_000_000_000, "b"),
            memo("now", 1_700_000_000, "c"),
        ]);
        assert_eq!(memos[0].created_at, memos[1].created_at);
        let ordered: Vec<&str> = memos.iter().map(|memo| memo.id.as_str()).collect();
        assert_eq!(ordered, vec!["farther", "far", "now"]);
    }

    #[test]
    fn unknown_action_returns_state_unchanged() {
        let state = reduce(
            MemoState::default(),
            MemoAction::SetTags {
                tags: vec!["x".to_string()],
            },
        );
        let next = reduce(state.clone(), MemoAction::Unknown);
        assert_eq!(next, state);
    }
}
