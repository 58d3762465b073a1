//! Memo domain model.
//!
//! # Responsibility
//! - Define the wire record (`RawMemo`) and the store record (`Memo`).
//! - Convert numeric wire timestamps into semantic timestamps.
//! - Describe shallow field-by-field edits (`MemoPatch`).
//!
//! # Invariants
//! - `id` is stable for the memo lifetime and never changed by a patch.
//! - `created_at`/`updated_at` always mirror `created_ts`/`updated_ts`.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for one memo.
///
/// Opaque to the store: only compared for equality and substring matching.
pub type MemoId = String;

/// Display format used by `Memo::created_at_display`.
pub const DISPLAY_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Server-side row lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowStatus {
    /// Active memo shown in the main list.
    #[default]
    Normal,
    /// Soft-deleted memo kept for restore.
    Hidden,
}

impl RowStatus {
    /// Returns the wire/storage name (`NORMAL` or `HIDDEN`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Hidden => "HIDDEN",
        }
    }

    /// Parses the wire/storage name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NORMAL" => Some(Self::Normal),
            "HIDDEN" => Some(Self::Hidden),
            _ => None,
        }
    }
}

/// Memo as returned by the remote API, before timestamp conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMemo {
    pub id: MemoId,
    #[serde(default)]
    pub creator_id: i64,
    pub content: String,
    /// Unix epoch seconds.
    pub created_ts: i64,
    /// Unix epoch seconds.
    pub updated_ts: i64,
    #[serde(default)]
    pub row_status: RowStatus,
}

/// Memo as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: MemoId,
    pub creator_id: i64,
    /// Free text; may embed `#tag` markers and other memo ids.
    pub content: String,
    pub row_status: RowStatus,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// Converts a wire memo into its store shape.
    ///
    /// Timestamps outside chrono's range clamp to the unix epoch.
    pub fn from_raw(raw: RawMemo) -> Self {
        Self {
            created_at: semantic_time(raw.created_ts),
            updated_at: semantic_time(raw.updated_ts),
            id: raw.id,
            creator_id: raw.creator_id,
            content: raw.content,
            row_status: raw.row_status,
            created_ts: raw.created_ts,
            updated_ts: raw.updated_ts,
        }
    }

    /// Returns whether the memo belongs in the active list.
    pub fn is_active(&self) -> bool {
        self.row_status == RowStatus::Normal
    }

    /// Creation time rendered in local time as `YYYY/MM/DD HH:MM:SS`.
    pub fn created_at_display(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string()
    }

    /// Last update time rendered in local time as `YYYY/MM/DD HH:MM:SS`.
    pub fn updated_at_display(&self) -> String {
        self.updated_at
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string()
    }

    /// Overwrites every field set in `patch`. The identifier is left as is.
    pub fn apply_patch(&mut self, patch: &MemoPatch) {
        if let Some(creator_id) = patch.creator_id {
            self.creator_id = creator_id;
        }
        if let Some(content) = patch.content.as_ref() {
            self.content = content.clone();
        }
        if let Some(row_status) = patch.row_status {
            self.row_status = row_status;
        }
        if let Some(created_ts) = patch.created_ts {
            self.created_ts = created_ts;
            self.created_at = semantic_time(created_ts);
        }
        if let Some(updated_ts) = patch.updated_ts {
            self.updated_ts = updated_ts;
            self.updated_at = semantic_time(updated_ts);
        }
    }
}

impl From<RawMemo> for Memo {
    fn from(value: RawMemo) -> Self {
        Self::from_raw(value)
    }
}

/// Shallow edit targeting one memo by id.
///
/// Unset fields keep their current value when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoPatch {
    pub id: MemoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_status: Option<RowStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_ts: Option<i64>,
}

impl MemoPatch {
    /// Creates an empty patch for `id`.
    pub fn new(id: impl Into<MemoId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the replacement content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the replacement row status.
    pub fn with_row_status(mut self, row_status: RowStatus) -> Self {
        self.row_status = Some(row_status);
        self
    }
}

impl From<Memo> for MemoPatch {
    fn from(value: Memo) -> Self {
        Self {
            id: value.id,
            creator_id: Some(value.creator_id),
            content: Some(value.content),
            row_status: Some(value.row_status),
            created_ts: Some(value.created_ts),
            updated_ts: Some(value.updated_ts),
        }
    }
}

/// Converts unix epoch seconds into a UTC timestamp.
pub fn semantic_time(epoch_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch_secs, 0).unwrap_or_default()
}
