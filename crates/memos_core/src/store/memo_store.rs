//! Owned state container with dispatch/subscribe.
//!
//! # Responsibility
//! - Own the single `MemoState` for one application session.
//! - Apply actions through `reduce` and notify subscribers on change.
//!
//! # Invariants
//! - State is only replaced by the output of `reduce`.
//! - Listeners run after the new state is installed, in subscription order.

use crate::model::memo::Memo;
use crate::store::action::MemoAction;
use crate::store::reducer::{reduce, MemoState};
use log::debug;

/// Callback invoked with the state produced by a dispatch.
pub type Listener = Box<dyn FnMut(&MemoState)>;

/// Handle returned by `MemoStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Session-scoped memo store.
#[derive(Default)]
pub struct MemoStore {
    state: MemoState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl MemoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &MemoState {
        &self.state
    }

    /// Applies `action` and notifies listeners when the state changed.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: MemoAction) -> bool {
        let kind = action.kind();
        let next = reduce(self.state.clone(), action);
        let changed = next != self.state;
        debug!(
            "event=store_dispatch module=store action={} changed={} memos={} tags={}",
            kind,
            changed,
            next.memos.len(),
            next.tags.len()
        );
        if !changed {
            return false;
        }

        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        true
    }

    /// Registers a listener for subsequent state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&MemoState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(current, _)| *current != id);
        self.listeners.len() != before
    }

    /// Finds one memo by id.
    pub fn memo_by_id(&self, id: &str) -> Option<&Memo> {
        self.state.memos.iter().find(|memo| memo.id == id)
    }

    /// Returns memos whose content textually contains `id`.
    pub fn linked_memos(&self, id: &str) -> Vec<&Memo> {
        if id.is_empty() {
            return Vec::new();
        }
        self.state
            .memos
            .iter()
            .filter(|memo| memo.content.contains(id))
            .collect()
    }
}
