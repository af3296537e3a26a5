//! SQLite schema creation for the playlist catalog.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Create the assets table if it doesn't exist.
///
/// This is idempotent — safe to call on every process start. An existing
/// table (and its rows) is left untouched.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
///
/// The connection stays in autocommit mode: each write is its own durable
/// transaction. No journal-mode override either, since the catalog file is
/// copied wholesale between machines and sidecar files are unwelcome.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Whether the assets table exists on this connection yet.
pub fn assets_table_exists(conn: &Connection) -> Result<bool, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='assets')",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

// Column set and defaults are the playback engine's contract; do not extend.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS assets (
    asset_id text PRIMARY KEY,
    name text,
    uri text,
    md5 text,
    start_date timestamp,
    end_date timestamp,
    duration text,
    mimetype text,
    is_enabled integer DEFAULT 0,
    nocache integer DEFAULT 0,
    play_order integer DEFAULT 0
);
";
