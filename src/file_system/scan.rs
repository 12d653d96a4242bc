use std::{fs, path::Path};

use anyhow::anyhow;
use walkdir::WalkDir;

use crate::file_system::entry::FileEntry;

/// Walks `root` recursively and returns every regular file larger than
/// `threshold_bytes`. The result is unordered.
///
/// Only a failure to open `root` itself is an error. Anything unreadable
/// below it is skipped.
pub fn find_large_files(root: &Path, threshold_bytes: u64) -> anyhow::Result<Vec<FileEntry>> {
    if !root.is_dir() {
        return Err(anyhow!("'{}' is not a valid directory.", root.display()));
    }

    let mut found = Vec::new();
    let mut skipped = 0usize;

    // Linked directories are reported as symlinks and never descended.
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(anyhow!("error reading dir '{}': {err}", root.display()));
            }
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {err}");
                skipped += 1;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        // Follows symlinks: a link to a file reports the target's size.
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() && metadata.len() > threshold_bytes => {
                found.push(FileEntry::new(metadata.len(), entry.into_path()));
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(
                    "error getting metadata for '{}': {err}",
                    entry.path().display()
                );
                skipped += 1;
            }
        }
    }

    tracing::info!(
        "scanned '{}': {} match(es), {} skipped",
        root.display(),
        found.len(),
        skipped
    );

    Ok(found)
}
