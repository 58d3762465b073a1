use memos_core::{reduce, Memo, MemoAction, MemoPatch, MemoState, RawMemo, RowStatus};

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

fn ids(state: &MemoState) -> Vec<String> {
    state.memos.iter().map(|memo| memo.id.clone()).collect()
}

fn state_with(memos: Vec<Memo>) -> MemoState {
    reduce(MemoState::default(), MemoAction::SetMemos { memos })
}

#[test]
fn set_memos_dedupes_and_orders_descending() {
    let state = state_with(vec![
        memo("a", 100, "first"),
        memo("b", 300, "second"),
        memo("a", 100, "dup"),
        memo("c", 200, "third"),
        memo("b", 300, "dup"),
    ]);

    assert_eq!(ids(&state), vec!["b", "c", "a"]);
    assert_eq!(state.memos[2].content, "first");
    for pair in state.memos.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn set_memos_example_orders_newest_first() {
    let state = state_with(vec![memo("1", 100, "A"), memo("2", 200, "B")]);
    assert_eq!(ids(&state), vec!["2", "1"]);
}

#[test]
fn insert_memo_example_lands_in_time_order() {
    let state = state_with(vec![memo("1", 100, "A"), memo("2", 200, "B")]);
    let state = reduce(
        state,
        MemoAction::InsertMemo {
            memo: memo("3", 150, "C"),
        },
    );
    assert_eq!(ids(&state), vec!["2", "3", "1"]);
}

#[test]
fn insert_memo_twice_keeps_one_entry_with_latest_content() {
    let state = state_with(vec![memo("1", 100, "A")]);
    let state = reduce(
        state,
        MemoAction::InsertMemo {
            memo: memo("9", 500, "optimistic"),
        },
    );
    let state = reduce(
        state,
        MemoAction::InsertMemo {
            memo: memo("9", 500, "confirmed"),
        },
    );

    assert_eq!(ids(&state), vec!["9", "1"]);
    assert_eq!(state.memos[0].content, "confirmed");
}

#[test]
fn delete_memo_by_id_is_idempotent() {
    let state = state_with(vec![memo("1", 100, "A"), memo("2", 200, "B")]);
    let once = reduce(
        state.clone(),
        MemoAction::DeleteMemoById {
            id: "1".to_string(),
        },
    );
    let twice = reduce(
        once.clone(),
        MemoAction::DeleteMemoById {
            id: "1".to_string(),
        },
    );
    let absent = reduce(
        state.clone(),
        MemoAction::DeleteMemoById {
            id: "missing".to_string(),
        },
    );

    assert_eq!(ids(&once), vec!["2"]);
    assert_eq!(once, twice);
    assert_eq!(absent, state);
}

#[test]
fn edit_memo_merges_fields_and_keeps_length() {
    let state = state_with(vec![memo("1", 100, "A"), memo("2", 200, "B")]);
    let edited = reduce(
        state.clone(),
        MemoAction::EditMemo(
            MemoPatch::new("1")
                .with_content("A edited")
                .with_row_status(RowStatus::Hidden),
        ),
    );

    assert_eq!(edited.memos.len(), 2);
    let target = edited.memos.iter().find(|memo| memo.id == "1").unwrap();
    assert_eq!(target.content, "A edited");
    assert_eq!(target.row_status, RowStatus::Hidden);
    assert_eq!(target.created_ts, 100);
    assert_eq!(edited.memos[0], state.memos[0]);
}

#[test]
fn edit_memo_for_absent_id_creates_nothing() {
    let state = state_with(vec![memo("1", 100, "A")]);
    let edited = reduce(
        state.clone(),
        MemoAction::EditMemo(MemoPatch::new("404").with_content("ghost")),
    );
    assert_eq!(edited, state);
}

#[test]
fn full_memo_edit_overwrites_every_field_but_id() {
    let state = state_with(vec![memo("1", 100, "A")]);
    let mut replacement = memo("1", 100, "B");
    replacement.updated_ts = 900;
    let edited = reduce(state, MemoAction::EditMemo(replacement.into()));
    assert_eq!(edited.memos[0].content, "B");
    assert_eq!(edited.memos[0].updated_ts, 900);
    assert_eq!(edited.memos[0].updated_at.timestamp(), 900);
}

#[test]
fn set_tags_replaces_verbatim() {
    let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
    let state = reduce(
        MemoState::default(),
        MemoAction::SetTags { tags: tags.clone() },
    );
    assert_eq!(state.tags, tags);
}

#[test]
fn wire_actions_decode_by_type_name() {
    let action: MemoAction = serde_json::from_value(serde_json::json!({
        "type": "DELETE_MEMO_BY_ID",
        "payload": { "id": "42" }
    }))
    .unwrap();
    assert_eq!(
        action,
        MemoAction::DeleteMemoById {
            id: "42".to_string()
        }
    );

    let action: MemoAction = serde_json::from_value(serde_json::json!({
        "type": "EDIT_MEMO",
        "payload": { "id": "42", "content": "new" }
    }))
    .unwrap();
    assert_eq!(
        action,
        MemoAction::EditMemo(MemoPatch::new("42").with_content("new"))
    );
}

#[test]
fn unrecognized_wire_action_is_a_no_op() {
    let action: MemoAction = serde_json::from_value(serde_json::json!({
        "type": "PIN_MEMO"
    }))
    .unwrap();
    assert_eq!(action, MemoAction::Unknown);

    let state = state_with(vec![memo("1", 100, "A")]);
    assert_eq!(reduce(state.clone(), action), state);
}

#[test]
fn unrecognized_wire_action_with_payload_is_a_no_op() {
    let state = state_with(vec![memo("1", 100, "A"), memo("2", 200, "B")]);

    for wire in [
        r#"{"type":"PIN_MEMO","payload":{"id":"42"}}"#,
        r#"{"payload":{"id":"1","pinned":true},"type":"PIN_MEMO"}"#,
    ] {
        let action: MemoAction = serde_json::from_str(wire).unwrap();
        assert_eq!(action, MemoAction::Unknown);
        assert_eq!(reduce(state.clone(), action), state);
    }
}

#[test]
fn known_wire_action_decodes_with_payload_first() {
    let action: MemoAction =
        serde_json::from_str(r#"{"payload":{"id":"42"},"type":"DELETE_MEMO_BY_ID"}"#).unwrap();
    assert_eq!(
        action,
        MemoAction::DeleteMemoById {
            id: "42".to_string()
        }
    );
}
