use std::path::PathBuf;

/// A file that passed the size threshold.
///
/// Field order matters: the derived ordering compares `size` first, then `path`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileEntry {
    pub size: u64,
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}

/// Sorts largest first. Equal sizes fall back to the path, also descending.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| b.cmp(a));
}

/// Widened so that several huge sparse files cannot overflow the sum.
pub fn total_size(entries: &[FileEntry]) -> u128 {
    entries.iter().map(|fe| u128::from(fe.size)).sum()
}
