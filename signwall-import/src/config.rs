//! Import pipeline configuration.

use std::path::PathBuf;

/// Banner caption used when none is given on the command line. A space
/// around the text helps on televisions that overscan the edges.
pub const DEFAULT_BANNER_TEXT: &str = "Photos";

/// Seconds each photo stays on screen unless overridden. Passed through
/// unvalidated, matching the playback engine's own tolerance.
pub const DEFAULT_DURATION_SECS: i64 = 10;

/// Settings threaded through the import pipeline at construction, instead
/// of process-wide constants.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Catalog database file. Relative paths resolve against the working
    /// directory, which is where a new catalog gets assembled.
    pub db_path: PathBuf,
    /// Local directory receiving transformed images. Created if absent.
    pub asset_dir: PathBuf,
    /// Directory prefix baked into catalog `uri` values: the path the
    /// playback device will see, not where the import runs.
    pub deploy_asset_dir: PathBuf,
    /// Font for the banner caption. Systems without the default font can
    /// substitute another installed one.
    pub banner_font: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("signwall.db"),
            asset_dir: PathBuf::from("signwall_assets"),
            deploy_asset_dir: PathBuf::from("/home/pi/signwall_assets"),
            banner_font: "Liberation-Sans-Bold".to_string(),
        }
    }
}

impl ImportConfig {
    /// Per-user default catalog location (`~/.signwall/signwall.db`), used
    /// by the shuffle utility when no path is given.
    pub fn default_db_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".signwall")
            .join("signwall.db")
    }
}
