//! Read queries for the playlist catalog.

use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use signwall_catalog::types::{Asset, TIMESTAMP_FORMAT};

use crate::operations::OperationError;

/// One `(asset_id, play_order)` pair as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOrderRow {
    pub asset_id: String,
    pub play_order: i64,
}

/// List every asset's id and play order, in the store's natural scan order.
pub fn list_play_orders(conn: &Connection) -> Result<Vec<PlayOrderRow>, OperationError> {
    let mut stmt = conn.prepare("SELECT asset_id, play_order FROM assets")?;
    let rows = stmt.query_map([], |row| {
        Ok(PlayOrderRow {
            asset_id: row.get(0)?,
            play_order: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch a single asset by id.
pub fn get_asset(conn: &Connection, asset_id: &str) -> Result<Option<Asset>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT asset_id, name, uri, md5, start_date, end_date,
                duration, mimetype, is_enabled, nocache, play_order
         FROM assets WHERE asset_id = ?1",
    )?;
    let result = stmt.query_row(params![asset_id], row_to_asset);
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Count catalog rows.
pub fn count_assets(conn: &Connection) -> Result<i64, OperationError> {
    let count = conn.query_row("SELECT COUNT(*) FROM assets", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_asset(row: &rusqlite::Row<'_>) -> rusqlite::Result<Asset> {
    let start: String = row.get(4)?;
    let end: String = row.get(5)?;
    Ok(Asset {
        asset_id: row.get(0)?,
        name: row.get(1)?,
        uri: row.get(2)?,
        md5: row.get(3)?,
        start_date: parse_timestamp(&start, 4)?,
        end_date: parse_timestamp(&end, 5)?,
        duration: row.get(6)?,
        mimetype: row.get(7)?,
        is_enabled: row.get(8)?,
        nocache: row.get(9)?,
        play_order: row.get(10)?,
    })
}

fn parse_timestamp(text: &str, column: usize) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}
