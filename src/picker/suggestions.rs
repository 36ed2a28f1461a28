//! Incremental suggestion list for the picker.
//!
//! Records are rebuilt from scratch on every input change. Nothing in here
//! mutates the session, so the same input always yields the same list.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SessionState;
use crate::host::Filesystem;
use crate::paths::{
    folder_label, has_file_extension, join_relative, normalize_separators, relative_label,
    resolve_against, split_last_segment,
};
use crate::workspace::SuggestionSettings;

pub const CREATE_PREFIX: &str = "Create: ";
pub const PARENT_LABEL: &str = "..";
pub const FOLDER_MATCHES_LABEL: &str = "Folders";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    NavigateParent,
    NavigateFolder,
    OpenFile,
    CreateFile,
    CreateFolder,
    Separator,
}

/// One candidate action shown for the current input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub label: String,
    pub kind: SuggestionKind,
    /// Absolute or workspace-relative; `None` only for separators.
    pub target_path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SuggestionRecord {
    fn create(name: &str, target: String, description: &str) -> Self {
        let kind = if has_file_extension(name) {
            SuggestionKind::CreateFile
        } else {
            SuggestionKind::CreateFolder
        };
        Self {
            label: format!("{CREATE_PREFIX}{name}"),
            kind,
            target_path: Some(target),
            description: Some(description.to_string()),
        }
    }

    fn folder(folder: &Path, root: &Path) -> Self {
        Self::navigate(folder_label(folder, root), folder, root)
    }

    fn navigate(label: String, folder: &Path, root: &Path) -> Self {
        let target = relative_label(folder, root);
        Self {
            label,
            kind: SuggestionKind::NavigateFolder,
            description: Some(target.clone()),
            target_path: Some(target),
        }
    }

    fn entry(kind: SuggestionKind, name: &str, target: String, description: &str) -> Self {
        Self {
            label: name.to_string(),
            kind,
            target_path: Some(target),
            description: Some(description.to_string()),
        }
    }

    fn separator(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: SuggestionKind::Separator,
            target_path: None,
            description: None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.kind != SuggestionKind::Separator
    }

    pub fn is_create(&self) -> bool {
        matches!(
            self.kind,
            SuggestionKind::CreateFile | SuggestionKind::CreateFolder
        )
    }
}

/// Builds the ordered suggestion list for `raw_input`.
///
/// - blank input lists every known folder;
/// - input with a separator offers one create record for its last segment
///   (none when that segment is empty);
/// - a simple name offers create records for the active directory and the
///   workspace root, then up to `match_limit` folders whose name contains it.
pub fn compute_suggestions<F: Filesystem + ?Sized>(
    raw_input: &str,
    session: &SessionState,
    settings: &SuggestionSettings,
    fs: &F,
) -> Vec<SuggestionRecord> {
    let root = session.workspace_root.as_path();
    if raw_input.trim().is_empty() {
        return session
            .known_folders
            .iter()
            .map(|folder| SuggestionRecord::folder(folder, root))
            .collect();
    }

    let normalized = normalize_separators(raw_input);
    if let Some((dir, name)) = split_last_segment(&normalized) {
        return path_suggestions(&normalized, dir, name, session, settings, fs);
    }

    name_suggestions(raw_input, session, settings)
}

fn path_suggestions<F: Filesystem + ?Sized>(
    normalized: &str,
    dir: &str,
    name: &str,
    session: &SessionState,
    settings: &SuggestionSettings,
    fs: &F,
) -> Vec<SuggestionRecord> {
    let root = session.workspace_root.as_path();
    let create = (!name.is_empty()).then(|| {
        let description = if has_file_extension(name) {
            "new file"
        } else {
            "new folder"
        };
        SuggestionRecord::create(name, normalized.to_string(), description)
    });

    if !settings.browse_entries {
        return create.into_iter().collect();
    }

    let mut records = Vec::new();
    if let Some(record) = create {
        if !fs.exists(&resolve_against(root, normalized)) {
            records.push(record);
        }
    }

    // `/name` has an empty directory part that still means the filesystem root.
    let prefix = if dir.is_empty() { "/" } else { dir };
    let dir_path = resolve_against(root, prefix);
    if !fs.is_dir(&dir_path) {
        return records;
    }
    if let Some(parent) = dir_path.parent() {
        records.push(SuggestionRecord::entry(
            SuggestionKind::NavigateParent,
            PARENT_LABEL,
            relative_label(parent, root),
            "parent directory",
        ));
    }

    let Ok(mut entries) = fs.list_dir(&dir_path) else {
        return records;
    };
    entries.sort();
    let needle = name.to_lowercase();
    for entry_name in entries
        .iter()
        .filter(|entry| entry.to_lowercase().starts_with(&needle))
    {
        let target = join_relative(prefix, entry_name);
        if fs.is_dir(&dir_path.join(entry_name)) {
            records.push(SuggestionRecord::entry(
                SuggestionKind::NavigateFolder,
                entry_name,
                target,
                "folder",
            ));
        } else {
            records.push(SuggestionRecord::entry(
                SuggestionKind::OpenFile,
                entry_name,
                target,
                "file",
            ));
        }
    }
    records
}

fn name_suggestions(
    name: &str,
    session: &SessionState,
    settings: &SuggestionSettings,
) -> Vec<SuggestionRecord> {
    let root = session.workspace_root.as_path();
    let mut records = Vec::new();

    if let Some(active) = &session.active_context_dir {
        let target = join_relative(&relative_label(active, root), name);
        records.push(SuggestionRecord::create(name, target, "in current directory"));
    }
    records.push(SuggestionRecord::create(
        name,
        name.to_string(),
        "in workspace root",
    ));

    let needle = name.to_lowercase();
    let matches = session
        .known_folders
        .iter()
        .filter_map(|folder| {
            let base = folder.file_name()?.to_string_lossy().to_string();
            base.to_lowercase().contains(&needle).then_some((base, folder))
        })
        .take(settings.match_limit);
    for (index, (base, folder)) in matches.enumerate() {
        if index == 0 {
            records.push(SuggestionRecord::separator(FOLDER_MATCHES_LABEL));
        }
        records.push(SuggestionRecord::navigate(base, folder, root));
    }
    records
}
