use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use signwall_import::import::ImportStats;
use signwall_import::progress::ImportProgress;
use signwall_import::{ImportConfig, ImportOptions, MagickTransformer, import_directory};

/// Import a directory tree of photos into the catalog.
pub(crate) fn run_import(
    images_dir: PathBuf,
    banner_text: String,
    duration: i64,
    db: Option<PathBuf>,
    asset_dir: Option<PathBuf>,
    deploy_dir: Option<PathBuf>,
    font: Option<String>,
) {
    if !images_dir.is_dir() {
        log::error!("Missing images directory: {}", images_dir.display());
        std::process::exit(1);
    }

    let mut config = ImportConfig::default();
    if let Some(path) = db {
        config.db_path = path;
    }
    if let Some(path) = asset_dir {
        config.asset_dir = path;
    }
    if let Some(path) = deploy_dir {
        config.deploy_asset_dir = path;
    }
    if let Some(name) = font {
        config.banner_font = name;
    }

    // Open or create the catalog
    let conn = match signwall_db::open_database(&config.db_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!(
                "Failed to open catalog at {}: {}",
                config.db_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let options = ImportOptions {
        banner_text,
        duration_secs: duration,
    };
    let transformer = MagickTransformer::new(config.banner_font.clone());

    let progress = CliImportProgress::new();
    match import_directory(
        &conn,
        &images_dir,
        &config,
        &options,
        &transformer,
        Some(&progress),
    ) {
        Ok(stats) => {
            log::info!(
                "{}",
                format!(
                    "Imported {} of {} file(s) into {}",
                    stats.imported,
                    stats.files_found,
                    config.db_path.display()
                )
                .if_supports_color(Stdout, |t| t.bold()),
            );
            if stats.skipped > 0 {
                log::warn!("{} file(s) skipped (transform failures)", stats.skipped);
            }
        }
        Err(e) => {
            log::error!("Import failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// CLI progress reporter: a bar over the pre-scanned total, with one
/// printed line per processed asset.
struct CliImportProgress {
    bar: ProgressBar,
}

impl CliImportProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("  {pos}/{len} {wide_bar:.cyan} {msg}")
                .expect("static pattern"),
        );
        Self { bar }
    }
}

impl ImportProgress for CliImportProgress {
    fn on_file(&self, current: usize, total: usize, name: &str) {
        if current == 1 {
            self.bar.set_length(total as u64);
        }
        self.bar.set_position(current as u64);
        self.bar.set_message(name.to_string());
    }

    fn on_imported(&self, name: &str, asset_id: &str) {
        self.bar.println(format!(
            "  {} Imported: {} -> {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            name,
            asset_id,
        ));
    }

    fn on_skipped(&self, name: &str, error: &str) {
        self.bar.println(format!(
            "  {} Skipped {}: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            name,
            error,
        ));
    }

    fn on_complete(&self, _stats: &ImportStats) {
        self.bar.finish_and_clear();
    }
}
