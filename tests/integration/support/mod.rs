use anyhow::{bail, Result};
use quickcreate::{
    ActivityLog, ConfirmChoice, HostSurface, PickerEvent, PickerEvents, SuggestionRecord,
    WorkspaceContext,
};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary workspace root plus a separate directory for the activity log.
pub struct WorkspaceFixture {
    workspace: TempDir,
    logs: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().expect("failed to create temp workspace"),
            logs: TempDir::new().expect("failed to create temp log dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("failed to create fixture folder");
        path
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture parent");
        }
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    pub fn context(&self) -> WorkspaceContext {
        WorkspaceContext::with_root(self.root())
    }

    pub fn log(&self) -> ActivityLog {
        ActivityLog::new(self.logs.path().join("activity.jsonl"))
    }
}

/// Host that records every interaction and answers prompts from a script.
#[derive(Default)]
pub struct RecordingHost {
    pub answers: VecDeque<ConfirmChoice>,
    pub prompts: Vec<String>,
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub opened: Vec<PathBuf>,
    pub revealed: Vec<PathBuf>,
    pub fail_open: bool,
}

impl RecordingHost {
    pub fn answering(answer: ConfirmChoice) -> Self {
        Self {
            answers: VecDeque::from([answer]),
            ..Self::default()
        }
    }
}

impl HostSurface for RecordingHost {
    fn confirm(&mut self, message: &str) -> ConfirmChoice {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(ConfirmChoice::Dismissed)
    }

    fn notify(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn open_document(&mut self, path: &Path) -> Result<()> {
        if self.fail_open {
            bail!("document surface closed");
        }
        self.opened.push(path.to_path_buf());
        Ok(())
    }

    fn reveal(&mut self, path: &Path) -> Result<()> {
        self.revealed.push(path.to_path_buf());
        Ok(())
    }
}

/// Plays back a fixed list of picker events, then dismisses.
pub struct ScriptedEvents {
    script: VecDeque<PickerEvent>,
    pub seen: Vec<(String, Vec<SuggestionRecord>)>,
}

impl ScriptedEvents {
    pub fn new(script: impl IntoIterator<Item = PickerEvent>) -> Self {
        Self {
            script: script.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Suggestions shown right before the last event was delivered.
    pub fn last_seen(&self) -> &[SuggestionRecord] {
        self.seen
            .last()
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }
}

impl PickerEvents for ScriptedEvents {
    fn next_event(&mut self, input: &str, suggestions: &[SuggestionRecord]) -> PickerEvent {
        self.seen.push((input.to_string(), suggestions.to_vec()));
        self.script.pop_front().unwrap_or(PickerEvent::Dismiss)
    }
}

pub fn input(text: &str) -> PickerEvent {
    PickerEvent::InputChanged(text.to_string())
}
