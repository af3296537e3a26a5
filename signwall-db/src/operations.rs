//! Write operations for the playlist catalog.

use rusqlite::{Connection, params};
use signwall_catalog::types::{Asset, TIMESTAMP_FORMAT};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Asset not found: '{id}'")]
    NotFound { id: String },
    #[error("Duplicate asset id: '{id}'")]
    DuplicateId { id: String },
}

/// Append one asset as a new row.
///
/// The connection runs in autocommit, so the row is durably committed
/// before this returns; no batching across inserts. Fails with
/// [`OperationError::DuplicateId`] when the primary key already exists.
pub fn insert_asset(conn: &Connection, asset: &Asset) -> Result<(), OperationError> {
    let result = conn.execute(
        "INSERT INTO assets (asset_id, name, uri, md5, start_date, end_date,
             duration, mimetype, is_enabled, nocache, play_order)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            asset.asset_id,
            asset.name,
            asset.uri,
            asset.md5,
            asset.start_date.format(TIMESTAMP_FORMAT).to_string(),
            asset.end_date.format(TIMESTAMP_FORMAT).to_string(),
            asset.duration,
            asset.mimetype,
            asset.is_enabled,
            asset.nocache,
            asset.play_order,
        ],
    );
    match result {
        Ok(_) => Ok(()),
        Err(e) if is_constraint_violation(&e) => Err(OperationError::DuplicateId {
            id: asset.asset_id.clone(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Reassign a single asset's play order.
pub fn update_play_order(
    conn: &Connection,
    asset_id: &str,
    play_order: i64,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE assets SET play_order = ?2 WHERE asset_id = ?1",
        params![asset_id, play_order],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            id: asset_id.to_string(),
        });
    }
    Ok(())
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
