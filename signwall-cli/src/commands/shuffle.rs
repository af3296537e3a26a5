use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use signwall_import::{ImportConfig, shuffle_play_order};

/// Randomize the play order of an existing catalog.
pub(crate) fn run_shuffle(db: Option<PathBuf>) {
    let db_path = db.unwrap_or_else(ImportConfig::default_db_path);

    // Opening ensures the schema, so shuffling a fresh catalog is a no-op
    // rather than an error.
    let conn = match signwall_db::open_database(&db_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to open catalog at {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    match shuffle_play_order(&conn) {
        Ok(stats) => {
            log::info!(
                "{}",
                format!(
                    "Shuffled play order of {} asset(s) in {}",
                    stats.reassigned,
                    db_path.display()
                )
                .if_supports_color(Stdout, |t| t.bold()),
            );
        }
        Err(e) => {
            log::error!("Shuffle failed: {}", e);
            std::process::exit(1);
        }
    }
}
