//! Append-only JSONL record of what each picker session did.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Type of activity events that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    SessionStarted,
    EnumerationIssue,
    SuggestionAccepted,
    NavigationRequested,
    EntryCreated,
    CreationDeclined,
    CreationFailed,
    DocumentOpened,
    SessionDismissed,
}

/// General-purpose activity event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub event_id: Uuid,
    pub session_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl ActivityEvent {
    pub fn new(session_id: Uuid, event_type: EventType, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            session_id,
            event_type,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Wraps the log path. A log without a path drops every event.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    events_path: Option<PathBuf>,
}

impl ActivityLog {
    pub fn new(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: Some(events_path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { events_path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.events_path.as_deref()
    }

    pub fn append_event(&self, event: &ActivityEvent) -> Result<()> {
        let Some(events_path) = &self.events_path else {
            return Ok(());
        };
        if let Some(parent) = events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Appends an event, ignoring write failures so logging never blocks the picker.
    pub fn record(&self, session_id: Uuid, event_type: EventType, details: serde_json::Value) {
        let event = ActivityEvent::new(session_id, event_type, details);
        let _ = self.append_event(&event);
    }

    pub fn load_events(&self) -> Result<Vec<ActivityEvent>> {
        let Some(events_path) = &self.events_path else {
            return Ok(Vec::new());
        };
        if !events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: ActivityEvent = serde_json::from_str(line)?;
            events.push(event);
        }
        Ok(events)
    }

    pub fn load_session(&self, session_id: Uuid) -> Result<Vec<ActivityEvent>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|event| event.session_id == session_id)
            .collect())
    }
}
