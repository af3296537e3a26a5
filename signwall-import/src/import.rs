//! Directory-to-catalog import pipeline.
//!
//! Walks a photo tree, composites each file through the transformer into
//! the asset directory under a freshly generated identifier, and registers
//! one catalog record per successfully transformed image with a
//! monotonically increasing play order.

use std::path::Path;

use rusqlite::Connection;
use signwall_catalog::types::{Asset, MIMETYPE_IMAGE, display_window};
use signwall_db::operations::{self, OperationError};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{DEFAULT_BANNER_TEXT, DEFAULT_DURATION_SECS, ImportConfig};
use crate::progress::ImportProgress;
use crate::scan::scan_photo_files;
use crate::transform::AssetTransformer;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for one import run.
pub struct ImportOptions {
    /// Text shown on the banner above every photo.
    pub banner_text: String,
    /// Seconds each photo stays on screen. Stored as-is, unvalidated.
    pub duration_secs: i64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            banner_text: DEFAULT_BANNER_TEXT.to_string(),
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}

/// Statistics from an import run.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub files_found: u64,
    pub imported: u64,
    pub skipped: u64,
}

/// Import every file under `images_dir` into the catalog.
///
/// The file list is scanned up front so progress can report a real total.
/// Play order starts at 1 and increments per registered record; files whose
/// transformation fails are logged and skipped, and the traversal
/// continues. Each insert commits on its own, so an interrupted run leaves
/// every already-registered record valid.
pub fn import_directory(
    conn: &Connection,
    images_dir: &Path,
    config: &ImportConfig,
    options: &ImportOptions,
    transformer: &dyn AssetTransformer,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    std::fs::create_dir_all(&config.asset_dir)?;

    let files = scan_photo_files(images_dir)?;
    let total = files.len();
    let mut stats = ImportStats {
        files_found: total as u64,
        ..Default::default()
    };

    let (start_date, end_date) = display_window();
    let mut order: i64 = 1;

    for (i, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if let Some(p) = progress {
            p.on_file(i + 1, total, &name);
        }

        let asset_id = fresh_asset_id();
        let dest = config.asset_dir.join(&asset_id);

        if let Err(e) = transformer.transform(path, &options.banner_text, &dest) {
            log::warn!("Transform failed for {}: {}", path.display(), e);
            stats.skipped += 1;
            if let Some(p) = progress {
                p.on_skipped(&name, &e.to_string());
            }
            continue;
        }

        let asset = Asset {
            uri: deploy_uri(&config.deploy_asset_dir, &asset_id),
            asset_id,
            name: name.clone(),
            md5: None,
            start_date,
            end_date,
            duration: options.duration_secs.to_string(),
            mimetype: MIMETYPE_IMAGE.to_string(),
            is_enabled: true,
            nocache: false,
            play_order: order,
        };
        let stored_id = register_asset(conn, asset, config)?;

        if let Some(p) = progress {
            p.on_imported(&name, &stored_id);
        }
        stats.imported += 1;
        order += 1;
    }

    if let Some(p) = progress {
        p.on_complete(&stats);
    }

    Ok(stats)
}

/// Insert `asset`, recovering once from an identifier collision.
///
/// A duplicate primary key means the freshly generated identifier already
/// exists in the catalog: vanishingly rare, but real on a re-run against a
/// stale asset directory. Recovery regenerates the identifier, renames the
/// already-written output file to match, rebuilds the uri, and retries the
/// insert once. Returns the identifier the record was stored under.
pub fn register_asset(
    conn: &Connection,
    asset: Asset,
    config: &ImportConfig,
) -> Result<String, ImportError> {
    match operations::insert_asset(conn, &asset) {
        Ok(()) => Ok(asset.asset_id),
        Err(OperationError::DuplicateId { id }) => {
            let fresh = fresh_asset_id();
            log::warn!("Asset id collision on '{}', retrying as '{}'", id, fresh);

            std::fs::rename(config.asset_dir.join(&id), config.asset_dir.join(&fresh))?;

            let retry = Asset {
                uri: deploy_uri(&config.deploy_asset_dir, &fresh),
                asset_id: fresh,
                ..asset
            };
            operations::insert_asset(conn, &retry)?;
            Ok(retry.asset_id)
        }
        Err(e) => Err(e.into()),
    }
}

/// Generate a fresh 32-character hex asset identifier.
fn fresh_asset_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Absolute path the playback device resolves, independent of where the
/// import actually ran.
fn deploy_uri(deploy_asset_dir: &Path, asset_id: &str) -> String {
    deploy_asset_dir.join(asset_id).to_string_lossy().to_string()
}
