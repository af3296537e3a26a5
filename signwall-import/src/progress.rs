//! Import progress reporting.

use crate::import::ImportStats;

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called before each file is processed.
    fn on_file(&self, current: usize, total: usize, name: &str);

    /// Called when a file has been transformed and registered.
    fn on_imported(&self, name: &str, asset_id: &str);

    /// Called when a file is skipped because its transformation failed.
    fn on_skipped(&self, name: &str, error: &str);

    /// Called when the import is complete.
    fn on_complete(&self, stats: &ImportStats);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _current: usize, _total: usize, _name: &str) {}
    fn on_imported(&self, _name: &str, _asset_id: &str) {}
    fn on_skipped(&self, _name: &str, _error: &str) {}
    fn on_complete(&self, _stats: &ImportStats) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, name: &str) {
        log::info!("  [{}/{}] {}", current, total, name);
    }

    fn on_imported(&self, name: &str, asset_id: &str) {
        log::info!("Imported: {} -> {}", name, asset_id);
    }

    fn on_skipped(&self, name: &str, error: &str) {
        log::warn!("Skipped {}: {}", name, error);
    }

    fn on_complete(&self, stats: &ImportStats) {
        log::info!(
            "Imported {} of {} file(s), {} skipped",
            stats.imported,
            stats.files_found,
            stats.skipped,
        );
    }
}
