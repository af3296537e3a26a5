//! Photo import pipeline and play-order shuffling for the playlist catalog.
//!
//! This crate owns the pipeline logic: walking a photo directory tree,
//! compositing each image through the external transformer, registering
//! catalog records with sequential play order, and reshuffling an existing
//! catalog's order into a fresh random permutation.

pub mod config;
pub mod import;
pub mod progress;
pub mod scan;
pub mod shuffle;
pub mod transform;

pub use config::{DEFAULT_BANNER_TEXT, DEFAULT_DURATION_SECS, ImportConfig};
pub use import::{ImportError, ImportOptions, ImportStats, import_directory, register_asset};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use scan::scan_photo_files;
pub use shuffle::{ShuffleError, ShuffleStats, shuffle_play_order};
pub use transform::{AssetTransformer, MagickTransformer, TransformError};
