use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What kind of entry an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn from_is_file(is_file: bool) -> Self {
        if is_file {
            EntryKind::File
        } else {
            EntryKind::Folder
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step of the creation flow that was running when something failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationStage {
    EnsuringParent,
    Writing,
    PostAction,
}

/// Failures that end a picker invocation.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("No workspace folder is open. Open a folder to create files or folders.")]
    NoWorkspaceContext,
    #[error("Failed to create {kind}: {source}")]
    CreationFailure {
        kind: EntryKind,
        stage: CreationStage,
        #[source]
        source: Cause,
    },
    #[error("Failed to open {}: {source}", path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: Cause,
    },
}

impl PickerError {
    pub(crate) fn creation(kind: EntryKind, stage: CreationStage, source: impl Into<Cause>) -> Self {
        Self::CreationFailure {
            kind,
            stage,
            source: source.into(),
        }
    }

    pub(crate) fn open(path: PathBuf, source: impl Into<Cause>) -> Self {
        Self::OpenFailure {
            path,
            source: source.into(),
        }
    }
}
