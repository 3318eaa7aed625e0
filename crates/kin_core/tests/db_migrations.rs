use kin_core::db::migrations::latest_version;
use kin_core::db::{open_db, open_db_in_memory, DbError};
use kin_core::{RepoError, SqliteItemRepository, SqliteVoteRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "items");
    assert_table_exists(&conn, "votes");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kin.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "votes");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repositories_reject_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteItemRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
    assert!(matches!(
        SqliteVoteRepository::try_new(&conn),
        Err(RepoError::UninitializedConnection { .. })
    ));
}

#[test]
fn repositories_reject_connection_missing_votes_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE items (id INTEGER PRIMARY KEY);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteVoteRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("votes"))
    ));
}

#[test]
fn schema_rejects_out_of_range_scores_and_duplicate_pairs() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO items (id, name, category, added_by) VALUES (1, 'Dune', 'Movie', 'Jace');",
        [],
    )
    .unwrap();

    assert!(conn
        .execute(
            "INSERT INTO votes (item_id, member, score) VALUES (1, 'Jace', 11);",
            [],
        )
        .is_err());
    conn.execute(
        "INSERT INTO votes (item_id, member, score) VALUES (1, 'Jace', 7);",
        [],
    )
    .unwrap();
    assert!(conn
        .execute(
            "INSERT INTO votes (item_id, member, score) VALUES (1, 'Jace', 3);",
            [],
        )
        .is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
