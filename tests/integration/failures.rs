use anyhow::Result;
use quickcreate::{
    run_create_command, EventType, LocalFs, PickerConfig, PickerEvent, SessionOutcome,
    SuggestionKind, WorkspaceContext,
};

use crate::support::{input, RecordingHost, ScriptedEvents, WorkspaceFixture};

#[test]
fn missing_workspace_is_reported_before_any_suggestions() {
    let fixture = WorkspaceFixture::new();
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([input("notes.md"), PickerEvent::Accept(None)]);

    let outcome = run_create_command(
        &WorkspaceContext::default(),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        fixture.log(),
    );

    assert_eq!(outcome, None);
    assert!(events.seen.is_empty());
    assert_eq!(host.errors.len(), 1);
    assert!(host.errors[0].starts_with("Error: No workspace folder is open"));
}

#[test]
fn blocked_parent_surfaces_one_file_failure() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    fixture.write("blocker", "not a directory");
    let log = fixture.log();
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([
        input("blocker/inner/x.txt"),
        PickerEvent::Accept(Some(0)),
    ]);

    let outcome = run_create_command(
        &fixture.context(),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        log.clone(),
    );

    assert_eq!(outcome, None);
    assert_eq!(host.errors.len(), 1, "errors: {:?}", host.errors);
    assert!(host.errors[0].starts_with("Error: Failed to create file: "));
    assert!(host.infos.is_empty());
    assert!(!fixture.path("blocker/inner").exists());

    let failed = log
        .load_events()?
        .into_iter()
        .find(|event| event.event_type == EventType::CreationFailed)
        .expect("creation failure should be logged");
    assert_eq!(failed.details["kind"], "file");
    Ok(())
}

#[test]
fn folder_failures_name_the_folder() {
    let fixture = WorkspaceFixture::new();
    fixture.write("blocker", "");
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([input("blocker/sub"), PickerEvent::Accept(Some(0))]);

    run_create_command(
        &fixture.context(),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        fixture.log(),
    );

    assert_eq!(host.errors.len(), 1);
    assert!(host.errors[0].starts_with("Error: Failed to create folder: "));
}

#[test]
fn open_failure_after_creation_is_reported() {
    let fixture = WorkspaceFixture::new();
    let mut host = RecordingHost {
        fail_open: true,
        ..RecordingHost::default()
    };
    let mut events = ScriptedEvents::new([input("draft.md"), PickerEvent::Accept(Some(0))]);

    let outcome = run_create_command(
        &fixture.context(),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        fixture.log(),
    );

    assert_eq!(outcome, None);
    assert_eq!(
        host.errors,
        vec!["Error: Failed to create file: document surface closed"]
    );
    // The write already happened; only the post action failed.
    assert!(fixture.path("draft.md").is_file());
}

#[test]
fn unreadable_root_is_logged_and_session_goes_on() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    let log = fixture.log();
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([input("notes.md")]);

    let outcome = run_create_command(
        &WorkspaceContext::with_root(fixture.path("gone")),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        log.clone(),
    );

    assert_eq!(outcome, Some(SessionOutcome::Dismissed));
    assert!(host.errors.is_empty());
    assert!(events.seen[0].1.is_empty());
    let records = events.last_seen();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, SuggestionKind::CreateFile);

    let kinds: Vec<EventType> = log.load_events()?.iter().map(|e| e.event_type).collect();
    assert_eq!(
        kinds,
        vec![
            EventType::EnumerationIssue,
            EventType::SessionStarted,
            EventType::SessionDismissed
        ]
    );
    Ok(())
}

#[test]
fn failing_to_open_an_existing_file_is_reported() -> Result<()> {
    let fixture = WorkspaceFixture::new();
    let main = fixture.write("src/main.rs", "fn main() {}");
    let log = fixture.log();
    let mut config = PickerConfig::default();
    config.suggestions.browse_entries = true;
    let mut host = RecordingHost {
        fail_open: true,
        ..RecordingHost::default()
    };
    let mut events = ScriptedEvents::new([input("src/ma"), PickerEvent::Accept(Some(2))]);

    let outcome = run_create_command(
        &fixture.context(),
        config,
        LocalFs,
        &mut host,
        &mut events,
        log.clone(),
    );

    assert_eq!(events.last_seen()[2].kind, SuggestionKind::OpenFile);
    assert_eq!(outcome, None);
    assert_eq!(
        host.errors,
        vec![format!(
            "Error: Failed to open {}: document surface closed",
            main.display()
        )]
    );
    assert!(host.opened.is_empty());
    assert!(log
        .load_events()?
        .iter()
        .all(|event| event.event_type != EventType::DocumentOpened));
    Ok(())
}
