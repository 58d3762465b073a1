//! Store actions.
//!
//! Wire form mirrors the front-end action objects:
//! `{"type": "SET_MEMOS", "payload": {"memos": [...]}}`.
//! Unrecognized types decode to [`MemoAction::Unknown`] whatever their payload.

use crate::model::memo::{Memo, MemoId, MemoPatch};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Closed set of state transitions understood by `reduce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum MemoAction {
    /// Replace the whole list; sorted and deduplicated by the reducer.
    #[serde(rename = "SET_MEMOS")]
    SetMemos { memos: Vec<Memo> },
    /// Replace the tag list verbatim.
    #[serde(rename = "SET_TAGS")]
    SetTags { tags: Vec<String> },
    /// Add one memo, or replace the entry with the same id.
    #[serde(rename = "INSERT_MEMO")]
    InsertMemo { memo: Memo },
    /// Drop the memo with this id if present.
    #[serde(rename = "DELETE_MEMO_BY_ID")]
    DeleteMemoById { id: MemoId },
    /// Shallow-merge fields onto the memo with the same id.
    #[serde(rename = "EDIT_MEMO")]
    EditMemo(MemoPatch),
    /// Any action type this build does not know about.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl MemoAction {
    /// Returns the wire name of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetMemos { .. } => "SET_MEMOS",
            Self::SetTags { .. } => "SET_TAGS",
            Self::InsertMemo { .. } => "INSERT_MEMO",
            Self::DeleteMemoById { .. } => "DELETE_MEMO_BY_ID",
            Self::EditMemo(_) => "EDIT_MEMO",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct MemosPayload {
    memos: Vec<Memo>,
}

#[derive(Deserialize)]
struct TagsPayload {
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct MemoPayload {
    memo: Memo,
}

#[derive(Deserialize)]
struct IdPayload {
    id: MemoId,
}

impl<'de> Deserialize<'de> for MemoAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireAction::deserialize(deserializer)?;
        let payload = wire.payload;
        let action = match wire.kind.as_str() {
            "SET_MEMOS" => serde_json::from_value::<MemosPayload>(payload)
                .map(|payload| Self::SetMemos { memos: payload.memos }),
            "SET_TAGS" => serde_json::from_value::<TagsPayload>(payload)
                .map(|payload| Self::SetTags { tags: payload.tags }),
            "INSERT_MEMO" => serde_json::from_value::<MemoPayload>(payload)
                .map(|payload| Self::InsertMemo { memo: payload.memo }),
            "DELETE_MEMO_BY_ID" => serde_json::from_value::<IdPayload>(payload)
                .map(|payload| Self::DeleteMemoById { id: payload.id }),
            "EDIT_MEMO" => serde_json::from_value::<MemoPatch>(payload).map(Self::EditMemo),
            _ => return Ok(Self::Unknown),
        };
        action.map_err(|err| D::Error::custom(format!("invalid {} payload: {err}", wire.kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::MemoAction;
    use serde_json::json;

    #[test]
    fn unknown_type_ignores_payload() {
        let action: MemoAction =
            serde_json::from_value(json!({ "type": "PIN_MEMO", "payload": { "id": "42" } }))
                .unwrap();
        assert_eq!(action, MemoAction::Unknown);
    }

    #[test]
    fn known_type_with_bad_payload_is_rejected() {
        let err = serde_json::from_value::<MemoAction>(json!({
            "type": "DELETE_MEMO_BY_ID",
            "payload": { "memo": "42" }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("DELETE_MEMO_BY_ID"));
    }

    #[test]
    fn serialized_action_decodes_back() {
        let action = MemoAction::DeleteMemoById {
            id: "7".to_string(),
        };
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(wire, json!({ "type": "DELETE_MEMO_BY_ID", "payload": { "id": "7" } }));
        assert_eq!(serde_json::from_value::<MemoAction>(wire).unwrap(), action);
    }
}
