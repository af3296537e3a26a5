//! SQLite persistence layer for the playlist catalog.
//!
//! Provides schema creation, record insertion/update, and read queries
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{OperationError, insert_asset, update_play_order};
pub use queries::{PlayOrderRow, count_assets, get_asset, list_play_orders};
pub use schema::{SchemaError, assets_table_exists, create_schema, open_database, open_memory};
