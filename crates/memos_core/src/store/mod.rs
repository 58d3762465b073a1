//! In-memory memo store.
//!
//! # Responsibility
//! - Hold the canonical list of fetched memos and the derived tag list.
//! - Funnel every mutation through the pure `reduce` transition function.
//!
//! # Invariants
//! - `memos` never contains two entries with the same id.
//! - `memos` is ordered by `created_at DESC` after every list-shaping action.
//! - Unknown actions leave the state unchanged.

pub mod action;
pub mod memo_store;
pub mod reducer;
