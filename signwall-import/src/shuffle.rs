//! Play-order randomization for an existing catalog.

use rand::Rng;
use rusqlite::Connection;
use signwall_db::operations::{OperationError, update_play_order};
use signwall_db::queries::list_play_orders;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
}

/// Statistics from a shuffle run.
#[derive(Debug, Default)]
pub struct ShuffleStats {
    pub reassigned: u64,
}

/// Reassign every asset's play order to a uniform random permutation of
/// `0..N-1`.
///
/// Each record, in the store's retrieval order, draws one value from a
/// shrinking pool without replacement; the pool empties exactly when the
/// last record is reassigned. Every draw is uniform over the remaining
/// values, so all N! orderings are equally likely. Old play-order values
/// are ignored entirely; duplicated or gapped inputs come out repaired.
pub fn shuffle_play_order(conn: &Connection) -> Result<ShuffleStats, ShuffleError> {
    let records = list_play_orders(conn)?;
    let mut pool: Vec<i64> = (0..records.len() as i64).collect();
    let mut rng = rand::rng();

    let mut stats = ShuffleStats::default();
    for record in &records {
        let drawn = pool.swap_remove(rng.random_range(0..pool.len()));
        update_play_order(conn, &record.asset_id, drawn)?;
        stats.reassigned += 1;
    }
    debug_assert!(pool.is_empty());

    Ok(stats)
}
