//! Data model types for the playlist catalog.
//!
//! One table, one row type: every displayable asset is a transformed photo
//! with a scheduling window and a play order. The column set matches what
//! the consuming playback engine expects, including fields these tools
//! never populate (`md5`, `nocache`).

use chrono::{NaiveDate, NaiveDateTime};

/// Text format bound to `timestamp`-typed columns in the catalog file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Type tag stored in the `mimetype` column. A fixed literal category the
/// playback engine switches on, not a true MIME type.
pub const MIMETYPE_IMAGE: &str = "image";

/// One playable asset and its scheduling metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// 32-character lowercase hex identifier. Generated fresh at import,
    /// never reused, immutable once assigned.
    pub asset_id: String,
    /// Display label, derived from the source filename.
    pub name: String,
    /// Absolute path of the transformed image on the playback device's
    /// filesystem, not the machine the import ran on.
    pub uri: String,
    /// Unused by these tools; present for playback-engine compatibility.
    pub md5: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Seconds on screen, stored as text. Uniform across one import run.
    pub duration: String,
    pub mimetype: String,
    pub is_enabled: bool,
    /// Unused by these tools; present for playback-engine compatibility.
    pub nocache: bool,
    /// Playback sequence position. Uniqueness is a caller invariant, not a
    /// database constraint.
    pub play_order: i64,
}

/// The wide-open display window every import sets: from the start of 2014
/// until the last minute of 2029, so a freshly deployed playlist shows
/// everything without further scheduling.
pub fn display_window() -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDate::from_ymd_opt(2014, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("static date");
    let end = NaiveDate::from_ymd_opt(2029, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 0))
        .expect("static date");
    (start, end)
}
