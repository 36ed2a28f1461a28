mod config;
pub mod enumerate;

pub use config::{
    config_dir, config_file_path, data_dir, load_from, load_or_default, save, save_to,
    EnumerationSettings, LoggingSettings, PickerConfig, SuggestionSettings,
    ACTIVITY_LOG_FILE_NAME, CONFIG_FILE_NAME,
};
pub use enumerate::{enumerate_folders, EnumerationIssue, FolderSnapshot};

use std::path::{Path, PathBuf};

/// What the host knows about the editor when the command is invoked.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceContext {
    /// First workspace folder, if any.
    pub root: Option<PathBuf>,
    /// Absolute path of the document open in the active editor.
    pub active_document: Option<PathBuf>,
}

impl WorkspaceContext {
    pub fn new(root: Option<PathBuf>, active_document: Option<PathBuf>) -> Self {
        Self {
            root,
            active_document,
        }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            active_document: None,
        }
    }

    pub fn active_document(mut self, path: impl Into<PathBuf>) -> Self {
        self.active_document = Some(path.into());
        self
    }

    /// Directory of the active document.
    pub fn active_context_dir(&self) -> Option<&Path> {
        self.active_document.as_deref().and_then(Path::parent)
    }
}
