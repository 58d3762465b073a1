//! Domain model shared by the store, service and API layers.
//!
//! # Responsibility
//! - Define the wire shape returned by the remote API (`RawMemo`).
//! - Define the store shape with semantic timestamps (`Memo`).
//!
//! # Invariants
//! - Every memo is identified by a stable, opaque `MemoId`.
//! - Soft delete is a `RowStatus::Hidden` row, not a missing row.

pub mod memo;
pub mod user;
