//! Bounded folder discovery under the workspace root.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::EnumerationSettings;

/// A directory that could not be listed during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationIssue {
    pub path: PathBuf,
    pub message: String,
}

impl EnumerationIssue {
    pub fn new(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

/// Folders discovered at session start plus anything that could not be read.
#[derive(Debug, Clone, Default)]
pub struct FolderSnapshot {
    pub folders: Vec<PathBuf>,
    pub issues: Vec<EnumerationIssue>,
}

/// Lists `root` and every non-excluded folder beneath it, depth first.
///
/// Folders at `settings.max_depth` are included but not expanded. Unreadable
/// directories are recorded as issues and skipped. The result is sorted by
/// the path's string form.
pub fn enumerate_folders(root: &Path, settings: &EnumerationSettings) -> FolderSnapshot {
    let mut snapshot = FolderSnapshot::default();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(settings.max_depth)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || is_traversable(entry, settings));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.depth() == 0 || entry.file_type().is_dir() {
                    snapshot.folders.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                snapshot
                    .issues
                    .push(EnumerationIssue::new(path, err.to_string()));
            }
        }
    }

    snapshot
        .folders
        .sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    snapshot.folders.dedup();
    snapshot
}

fn is_traversable(entry: &DirEntry, settings: &EnumerationSettings) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if settings.skip_hidden && name.starts_with('.') {
        return false;
    }
    !settings
        .excluded_names
        .iter()
        .any(|excluded| excluded.as_str() == name.as_ref())
}
