//! signwall CLI
//!
//! Command-line front end for bulk-importing photo directories into a
//! signage playlist catalog and for shuffling an existing catalog's
//! playback order.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use signwall_import::{DEFAULT_BANNER_TEXT, DEFAULT_DURATION_SECS};

#[derive(Parser)]
#[command(name = "signwall")]
#[command(about = "Bulk-import photos into a signage playlist catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a directory tree of photos into the catalog
    Import {
        /// Base directory containing the photos to import
        images_dir: PathBuf,

        /// Text shown on the banner above each photo
        #[arg(default_value = DEFAULT_BANNER_TEXT)]
        banner_text: String,

        /// Seconds each photo stays on screen (stored as given, unvalidated)
        #[arg(default_value_t = DEFAULT_DURATION_SECS)]
        duration: i64,

        /// Catalog database file (default: ./signwall.db)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Directory receiving the transformed images (default: ./signwall_assets)
        #[arg(long)]
        asset_dir: Option<PathBuf>,

        /// Asset directory path as seen by the playback device
        #[arg(long)]
        deploy_dir: Option<PathBuf>,

        /// Font for the banner caption
        #[arg(long)]
        font: Option<String>,
    },

    /// Randomize the play order of an existing catalog
    Shuffle {
        /// Catalog database file (default: ~/.signwall/signwall.db)
        db: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            images_dir,
            banner_text,
            duration,
            db,
            asset_dir,
            deploy_dir,
            font,
        } => {
            commands::import::run_import(
                images_dir,
                banner_text,
                duration,
                db,
                asset_dir,
                deploy_dir,
                font,
            );
        }
        Commands::Shuffle { db } => {
            commands::shuffle::run_shuffle(db);
        }
    }
}
