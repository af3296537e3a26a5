use signwall_db::schema::{assets_table_exists, create_schema, open_database, open_memory};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert!(assets_table_exists(&conn).unwrap());
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();

    let table_count: i32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='assets'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn table_absent_before_creation() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='assets')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(!exists);
}

#[test]
fn all_columns_exist() {
    let conn = open_memory().unwrap();
    let columns = [
        "asset_id",
        "name",
        "uri",
        "md5",
        "start_date",
        "end_date",
        "duration",
        "mimetype",
        "is_enabled",
        "nocache",
        "play_order",
    ];
    for column in columns {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM pragma_table_info('assets') WHERE name=?1)",
                [column],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "column '{}' should exist", column);
    }
}

#[test]
fn flag_columns_default_to_zero() {
    let conn = open_memory().unwrap();
    conn.execute("INSERT INTO assets (asset_id) VALUES ('abc123')", [])
        .unwrap();

    let (enabled, nocache, order): (i64, i64, i64) = conn
        .query_row(
            "SELECT is_enabled, nocache, play_order FROM assets WHERE asset_id='abc123'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(enabled, 0);
    assert_eq!(nocache, 0);
    assert_eq!(order, 0);
}

#[test]
fn open_database_creates_and_reopens_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let conn = open_database(&path).unwrap();
    assert!(assets_table_exists(&conn).unwrap());
    drop(conn);

    // Reopening an existing catalog must not error or wipe the table.
    let conn = open_database(&path).unwrap();
    assert!(assets_table_exists(&conn).unwrap());
}
