//! Path classification helpers shared by the suggestion engine and the resolver.
//!
//! Everything here is lexical: nothing touches the filesystem. The file-vs-folder
//! decision is made from the trailing segment alone and is never second-guessed
//! by what already exists on disk.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Canonical separator used for splitting and for workspace-relative targets.
pub const SEPARATOR: char = '/';

/// Returns true when the last segment of `name` looks like a file name.
///
/// The segment must contain a `.` that is neither its first character (hidden
/// names such as `.gitignore`) nor its last (`folder.`). The last dot wins, so
/// `archive.tar.gz` is a file.
pub fn has_file_extension(name: &str) -> bool {
    let normalized = normalize_separators(name);
    let segment = last_segment(&normalized);
    match segment.rfind('.') {
        Some(index) => index > 0 && index < segment.len() - 1,
        None => false,
    }
}

/// Rewrites both `/` and the platform separator to [`SEPARATOR`].
pub fn normalize_separators(path_like: &str) -> String {
    if MAIN_SEPARATOR == SEPARATOR {
        path_like.to_string()
    } else {
        path_like.replace(MAIN_SEPARATOR, "/")
    }
}

pub fn is_absolute(path_like: &str) -> bool {
    Path::new(path_like).is_absolute() || Path::new(&normalize_separators(path_like)).is_absolute()
}

/// Splits a normalized path on its last separator into `(directory, name)`.
///
/// Returns `None` when there is no separator. The directory part is empty for
/// inputs such as `/name`.
pub fn split_last_segment(normalized: &str) -> Option<(&str, &str)> {
    normalized
        .rfind(SEPARATOR)
        .map(|index| (&normalized[..index], &normalized[index + 1..]))
}

fn last_segment(normalized: &str) -> &str {
    split_last_segment(normalized)
        .map(|(_, name)| name)
        .unwrap_or(normalized)
}

/// Display name for a folder: its basename, or `.` for the workspace root.
pub fn folder_label(path: &Path, root: &Path) -> String {
    if path == root {
        return ".".to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Workspace-relative label using `/` separators, `.` for the root itself.
///
/// Paths outside the root keep their absolute form.
pub fn relative_label(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => normalize_separators(&path.to_string_lossy()),
    }
}

/// Joins a workspace-relative prefix and a name, dropping the `.` root prefix.
pub fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() || prefix == "." {
        name.to_string()
    } else if prefix.ends_with(SEPARATOR) {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}{SEPARATOR}{name}")
    }
}

/// Resolves `path_like` against `base` and folds `.`/`..` components lexically.
///
/// Absolute inputs ignore `base`.
pub fn resolve_against(base: &Path, path_like: &str) -> PathBuf {
    let normalized = normalize_separators(path_like);
    let candidate = Path::new(&normalized);
    if is_absolute(&normalized) {
        clean(candidate)
    } else {
        clean(&base.join(candidate))
    }
}

/// Lexical normalisation: removes `.` segments and resolves `..` against the
/// preceding segment. Never climbs above the filesystem root.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    cleaned.components().next_back(),
                    Some(Component::Normal(_))
                ) && cleaned.pop();
                if !popped && !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
