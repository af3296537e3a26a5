//! Directory scanner for photo trees.

use std::path::{Path, PathBuf};

/// Collect every regular file under `base`, recursively.
///
/// Entries within each directory are visited in path order, descending into
/// subdirectories as they are encountered, so the resulting list (and
/// therefore the initial play-order assignment) is deterministic across
/// runs over the same tree. No extension filtering: anything the
/// transformer cannot read gets skipped at transform time instead.
pub fn scan_photo_files(base: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(base, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let mut entries: Vec<std::fs::DirEntry> = std::fs::read_dir(dir)?.flatten().collect();
    entries.sort_by_key(|e| e.path());

    for entry in &entries {
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            walk(&path, files)?;
        }
    }

    Ok(())
}
