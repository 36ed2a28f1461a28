//! Turns an accepted record or typed text into a concrete target.

use std::env;
use std::path::{Path, PathBuf};

use super::suggestions::{SuggestionKind, SuggestionRecord};
use super::SessionState;
use crate::error::EntryKind;
use crate::host::Filesystem;
use crate::paths::{has_file_extension, resolve_against, SEPARATOR};

/// What the user accepted: a highlighted record, or the raw text when nothing
/// was selected.
#[derive(Debug, Clone, Copy)]
pub enum Accepted<'a> {
    Record(&'a SuggestionRecord),
    FreeText(&'a str),
}

/// Final location of a create or open action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub absolute_path: PathBuf,
    /// Decided from the name alone, never from what exists on disk.
    pub is_file: bool,
    /// Checked live when the target is resolved.
    pub already_exists: bool,
}

impl ResolvedTarget {
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_is_file(self.is_file)
    }

    pub fn display_name(&self) -> String {
        self.absolute_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.absolute_path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Restart the suggestion loop with this input.
    Navigate { next_input: String },
    Open(ResolvedTarget),
    Create(ResolvedTarget),
}

/// Resolves an accepted item against the session.
///
/// Returns `None` for separators and blank text, which have nothing to act on.
pub fn resolve<F: Filesystem + ?Sized>(
    accepted: Accepted<'_>,
    session: &SessionState,
    fs: &F,
) -> Option<Resolution> {
    let root = Some(session.workspace_root.as_path());
    match accepted {
        Accepted::Record(record) => {
            let target = record.target_path.as_deref()?;
            match record.kind {
                SuggestionKind::Separator => None,
                SuggestionKind::NavigateParent | SuggestionKind::NavigateFolder => {
                    Some(Resolution::Navigate {
                        next_input: with_trailing_separator(target),
                    })
                }
                SuggestionKind::OpenFile => Some(Resolution::Open(target_for(target, true, root, fs))),
                SuggestionKind::CreateFile => {
                    Some(Resolution::Create(target_for(target, true, root, fs)))
                }
                SuggestionKind::CreateFolder => {
                    Some(Resolution::Create(target_for(target, false, root, fs)))
                }
            }
        }
        Accepted::FreeText(text) => resolve_input(text, root, fs).map(Resolution::Create),
    }
}

/// Resolves typed text directly, classifying it by its extension.
pub fn resolve_input<F: Filesystem + ?Sized>(
    text: &str,
    root: Option<&Path>,
    fs: &F,
) -> Option<ResolvedTarget> {
    if text.trim().is_empty() {
        return None;
    }
    Some(target_for(text, has_file_extension(text), root, fs))
}

/// Absolute inputs are kept; relative ones join the workspace root, or the
/// current directory when no root is known.
pub fn resolve_path(path_like: &str, root: Option<&Path>) -> PathBuf {
    let base = match root {
        Some(root) => root.to_path_buf(),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    resolve_against(&base, path_like)
}

fn target_for<F: Filesystem + ?Sized>(
    path_like: &str,
    is_file: bool,
    root: Option<&Path>,
    fs: &F,
) -> ResolvedTarget {
    let absolute_path = resolve_path(path_like, root);
    let already_exists = fs.exists(&absolute_path);
    ResolvedTarget {
        absolute_path,
        is_file,
        already_exists,
    }
}

fn with_trailing_separator(target: &str) -> String {
    if target.ends_with(SEPARATOR) {
        target.to_string()
    } else {
        format!("{target}{SEPARATOR}")
    }
}
