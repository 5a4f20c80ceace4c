use rusqlite::Connection;
use sitecontent_core::db::migrations::latest_version;
use sitecontent_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "documents");
}

#[test]
fn reopening_a_database_keeps_schema_and_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO documents (key, body) VALUES ('joinPage', '{}');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let (body, revision): (String, i64) = conn
        .query_row(
            "SELECT body, revision FROM documents WHERE key = 'joinPage';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(body, "{}");
    assert_eq!(revision, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

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
fn revision_must_be_positive() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO documents (key, body, revision) VALUES ('homepage', '{}', 0);",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn missing_parent_directory_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = open_db(dir.path().join("missing").join("content.db")).unwrap_err();
    assert!(matches!(err, DbError::Open(_)), "unexpected error: {err}");
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "expected table `{table_name}` to exist");
}
