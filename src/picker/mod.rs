//! The picker session: one record per invocation, driven by two events.
//!
//! `input changed` recomputes the suggestion list; `accept` either restarts
//! the loop with a navigation input or ends the session with a create/open
//! outcome. Nothing survives past the end of a session.

pub mod resolver;
pub mod suggestions;

pub use resolver::{resolve, resolve_input, resolve_path, Accepted, Resolution, ResolvedTarget};
pub use suggestions::{compute_suggestions, SuggestionKind, SuggestionRecord};

use serde_json::json;
use std::path::PathBuf;
use uuid::Uuid;

use crate::activity::{ActivityLog, EventType};
use crate::creation::{create_entry, open_existing, CreationOutcome};
use crate::error::PickerError;
use crate::host::{Filesystem, HostSurface};
use crate::workspace::{enumerate_folders, PickerConfig, WorkspaceContext};

/// Ephemeral state of one picker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub raw_input: String,
    pub workspace_root: PathBuf,
    pub active_context_dir: Option<PathBuf>,
    /// Snapshot taken at session start. Folders created later are not added.
    pub known_folders: Vec<PathBuf>,
}

impl SessionState {
    pub fn new(
        workspace_root: PathBuf,
        active_context_dir: Option<PathBuf>,
        known_folders: Vec<PathBuf>,
    ) -> Self {
        Self {
            raw_input: String::new(),
            workspace_root,
            active_context_dir,
            known_folders,
        }
    }
}

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(CreationOutcome),
    Dismissed,
}

/// What an accept did to the session.
#[derive(Debug)]
pub enum AcceptStep<F: Filesystem> {
    /// Navigation or a non-actionable pick; the session goes on.
    Continue(PickerSession<F>),
    Done(SessionOutcome),
}

/// A live picker session over filesystem `F`.
#[derive(Debug)]
pub struct PickerSession<F: Filesystem> {
    id: Uuid,
    state: SessionState,
    config: PickerConfig,
    suggestions: Vec<SuggestionRecord>,
    fs: F,
    log: ActivityLog,
}

impl<F: Filesystem> PickerSession<F> {
    /// Starts a session: snapshots the folder tree and computes the initial list.
    pub fn start(
        context: &WorkspaceContext,
        config: PickerConfig,
        fs: F,
        log: ActivityLog,
    ) -> Result<Self, PickerError> {
        let root = context.root.clone().ok_or(PickerError::NoWorkspaceContext)?;
        let id = Uuid::new_v4();
        let snapshot = enumerate_folders(&root, &config.enumeration);
        for issue in &snapshot.issues {
            log.record(
                id,
                EventType::EnumerationIssue,
                json!({ "path": issue.path, "message": issue.message }),
            );
        }
        log.record(
            id,
            EventType::SessionStarted,
            json!({
                "root": root,
                "active_context_dir": context.active_context_dir(),
                "known_folders": snapshot.folders.len(),
                "issues": snapshot.issues.len(),
            }),
        );

        let state = SessionState::new(
            root,
            context.active_context_dir().map(PathBuf::from),
            snapshot.folders,
        );
        let mut session = Self {
            id,
            state,
            config,
            suggestions: Vec::new(),
            fs,
            log,
        };
        session.refresh();
        Ok(session)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn raw_input(&self) -> &str {
        &self.state.raw_input
    }

    pub fn suggestions(&self) -> &[SuggestionRecord] {
        &self.suggestions
    }

    /// Handles an input change and returns the fresh list.
    pub fn set_input(&mut self, text: impl Into<String>) -> &[SuggestionRecord] {
        self.state.raw_input = text.into();
        self.refresh();
        &self.suggestions
    }

    /// Handles an accept with the highlighted record index, if any.
    ///
    /// Out-of-range indices and separators leave the session running.
    pub fn accept(
        mut self,
        selected: Option<usize>,
        host: &mut dyn HostSurface,
    ) -> Result<AcceptStep<F>, PickerError> {
        let resolution = match selected {
            Some(index) => {
                let Some(record) = self.suggestions.get(index).filter(|r| r.is_selectable()) else {
                    return Ok(AcceptStep::Continue(self));
                };
                self.log.record(
                    self.id,
                    EventType::SuggestionAccepted,
                    json!({ "input": self.state.raw_input, "record": record }),
                );
                resolve(Accepted::Record(record), &self.state, &self.fs)
            }
            None => resolve(Accepted::FreeText(&self.state.raw_input), &self.state, &self.fs),
        };

        match resolution {
            None if selected.is_some() => Ok(AcceptStep::Continue(self)),
            None => {
                self.log.record(
                    self.id,
                    EventType::SessionDismissed,
                    json!({ "reason": "blank_input" }),
                );
                Ok(AcceptStep::Done(SessionOutcome::Dismissed))
            }
            Some(Resolution::Navigate { next_input }) => {
                self.log.record(
                    self.id,
                    EventType::NavigationRequested,
                    json!({ "next_input": next_input }),
                );
                self.set_input(next_input);
                Ok(AcceptStep::Continue(self))
            }
            Some(Resolution::Open(target)) => {
                let outcome = open_existing(&target, host)?;
                self.log.record(
                    self.id,
                    EventType::DocumentOpened,
                    json!({ "path": target.absolute_path }),
                );
                Ok(AcceptStep::Done(SessionOutcome::Completed(outcome)))
            }
            Some(Resolution::Create(target)) => self.finish_create(&target, host),
        }
    }

    /// Ends the session without acting.
    pub fn dismiss(self) -> SessionOutcome {
        self.log.record(
            self.id,
            EventType::SessionDismissed,
            json!({ "reason": "cancelled" }),
        );
        SessionOutcome::Dismissed
    }

    fn finish_create(
        self,
        target: &ResolvedTarget,
        host: &mut dyn HostSurface,
    ) -> Result<AcceptStep<F>, PickerError> {
        match create_entry(target, &self.fs, host) {
            Ok(outcome) => {
                let event_type = match &outcome {
                    CreationOutcome::Created { .. } => EventType::EntryCreated,
                    _ => EventType::CreationDeclined,
                };
                self.log.record(
                    self.id,
                    event_type,
                    json!({
                        "path": target.absolute_path,
                        "kind": target.kind(),
                        "already_exists": target.already_exists,
                    }),
                );
                Ok(AcceptStep::Done(SessionOutcome::Completed(outcome)))
            }
            Err(err) => {
                self.log.record(
                    self.id,
                    EventType::CreationFailed,
                    json!({
                        "path": target.absolute_path,
                        "kind": target.kind(),
                        "error": err.to_string(),
                    }),
                );
                Err(err)
            }
        }
    }

    fn refresh(&mut self) {
        self.suggestions = compute_suggestions(
            &self.state.raw_input,
            &self.state,
            &self.config.suggestions,
            &self.fs,
        );
    }
}

/// UI events delivered serially by the picker widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    InputChanged(String),
    /// Accept with the highlighted record index, or `None` for the typed text.
    Accept(Option<usize>),
    Dismiss,
}

/// Source of picker events. Implementations usually render `suggestions`
/// before waiting for the next event.
pub trait PickerEvents {
    fn next_event(&mut self, input: &str, suggestions: &[SuggestionRecord]) -> PickerEvent;
}

/// The "create file or folder" command.
///
/// Runs one session to completion and reports any failure through
/// `host.error` as a single message. Returns `None` when the command failed.
pub fn run_create_command<F: Filesystem>(
    context: &WorkspaceContext,
    config: PickerConfig,
    fs: F,
    host: &mut dyn HostSurface,
    events: &mut dyn PickerEvents,
    log: ActivityLog,
) -> Option<SessionOutcome> {
    match drive_session(context, config, fs, host, events, log) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            host.error(&format!("Error: {err}"));
            None
        }
    }
}

fn drive_session<F: Filesystem>(
    context: &WorkspaceContext,
    config: PickerConfig,
    fs: F,
    host: &mut dyn HostSurface,
    events: &mut dyn PickerEvents,
    log: ActivityLog,
) -> Result<SessionOutcome, PickerError> {
    let mut session = PickerSession::start(context, config, fs, log)?;
    loop {
        match events.next_event(session.raw_input(), session.suggestions()) {
            PickerEvent::InputChanged(text) => {
                session.set_input(text);
            }
            PickerEvent::Accept(selected) => match session.accept(selected, host)? {
                AcceptStep::Continue(next) => session = next,
                AcceptStep::Done(outcome) => return Ok(outcome),
            },
            PickerEvent::Dismiss => return Ok(session.dismiss()),
        }
    }
}
