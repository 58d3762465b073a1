use memos_core::db::migrations::{latest_version, schema_version};
use memos_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

fn insert_user(conn: &Connection, name: &str) -> i64 {
    conn.execute("INSERT INTO user (name) VALUES (?1);", [name])
        .unwrap();
    conn.last_insert_rowid()
}

fn sqlite_object_exists(conn: &Connection, kind: &str, name: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = ?1 AND name = ?2);",
        [kind, name],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn fresh_database_has_memo_schema_and_listing_index() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert!(sqlite_object_exists(&conn, "table", "user"));
    assert!(sqlite_object_exists(&conn, "table", "memo"));
    assert!(sqlite_object_exists(
        &conn,
        "index",
        "idx_memo_creator_status_created"
    ));
}

#[test]
fn memo_rows_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memos_dev.db");

    let conn = open_db(&path).unwrap();
    let creator = insert_user(&conn, "alice");
    conn.execute(
        "INSERT INTO memo (id, creator_id, content) VALUES ('m1', ?1, 'kept');",
        [creator],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let content: String = conn
        .query_row("SELECT content FROM memo WHERE id = 'm1';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(content, "kept");
}

#[test]
fn file_from_newer_build_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memos_prod.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn new_memo_defaults_to_normal_with_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let creator = insert_user(&conn, "alice");
    conn.execute(
        "INSERT INTO memo (id, creator_id, content) VALUES ('m1', ?1, '#todo');",
        [creator],
    )
    .unwrap();

    let (status, created_ts, updated_ts): (String, i64, i64) = conn
        .query_row(
            "SELECT row_status, created_ts, updated_ts FROM memo WHERE id = 'm1';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(status, "NORMAL");
    assert!(created_ts > 0);
    assert_eq!(created_ts, updated_ts);
}

#[test]
fn memo_row_status_only_accepts_normal_or_hidden() {
    let conn = open_db_in_memory().unwrap();
    let creator = insert_user(&conn, "alice");
    let result = conn.execute(
        "INSERT INTO memo (id, creator_id, row_status) VALUES ('x', ?1, 'ARCHIVED');",
        [creator],
    );
    assert!(result.is_err());
}

#[test]
fn memo_requires_existing_creator_and_follows_its_deletion() {
    let conn = open_db_in_memory().unwrap();
    let orphan = conn.execute(
        "INSERT INTO memo (id, creator_id) VALUES ('orphan', 404);",
        [],
    );
    assert!(orphan.is_err());

    let creator = insert_user(&conn, "alice");
    conn.execute(
        "INSERT INTO memo (id, creator_id) VALUES ('m1', ?1);",
        [creator],
    )
    .unwrap();
    conn.execute("DELETE FROM user WHERE id = ?1;", [creator])
        .unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM memo;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}
