use quickcreate::{
    run_create_command, CreationOutcome, LocalFs, PickerConfig, PickerEvent, SessionOutcome,
    SuggestionKind,
};

use crate::support::{input, RecordingHost, ScriptedEvents, WorkspaceFixture};

#[test]
fn matched_folder_navigates_then_creates_inside_it() {
    let fixture = WorkspaceFixture::new();
    fixture.mkdir("components/forms");
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([
        input("forms"),
        PickerEvent::Accept(Some(2)),
        input("components/forms/field.tsx"),
        PickerEvent::Accept(Some(0)),
    ]);

    let outcome = run_create_command(
        &fixture.context(),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        fixture.log(),
    );

    let (_, matches) = &events.seen[1];
    assert_eq!(matches[1].kind, SuggestionKind::Separator);
    assert_eq!(matches[2].kind, SuggestionKind::NavigateFolder);
    assert_eq!(matches[2].target_path.as_deref(), Some("components/forms"));

    let (after_navigation, records) = &events.seen[2];
    assert_eq!(after_navigation, "components/forms/");
    assert!(records.iter().all(|r| !r.is_create()));

    let created = fixture.path("components/forms/field.tsx");
    assert!(created.is_file());
    assert!(matches!(
        outcome,
        Some(SessionOutcome::Completed(CreationOutcome::Created { .. }))
    ));
}

#[test]
fn blank_input_lists_folders_in_sorted_order() {
    let fixture = WorkspaceFixture::new();
    fixture.mkdir("zeta");
    fixture.mkdir("alpha/beta");
    fixture.mkdir(".cache/tmp");
    fixture.mkdir("node_modules/pkg");
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([PickerEvent::Accept(Some(0))]);

    run_create_command(
        &fixture.context(),
        PickerConfig::default(),
        LocalFs,
        &mut host,
        &mut events,
        fixture.log(),
    );

    let targets: Vec<_> = events.seen[0]
        .1
        .iter()
        .map(|r| r.target_path.clone().unwrap_or_default())
        .collect();
    assert_eq!(targets, vec![".", "alpha", "alpha/beta", "zeta"]);
    // Accepting the root restarts the loop with `./`.
    assert_eq!(events.seen[1].0, "./");
}

#[test]
fn browsing_walks_up_and_opens_existing_files() {
    let fixture = WorkspaceFixture::new();
    let main = fixture.write("src/main.rs", "fn main() {}");
    let mut config = PickerConfig::default();
    config.suggestions.browse_entries = true;
    let mut host = RecordingHost::default();
    let mut events = ScriptedEvents::new([
        input("src/"),
        PickerEvent::Accept(Some(0)),
        input("src/ma"),
        PickerEvent::Accept(Some(2)),
    ]);

    let outcome = run_create_command(
        &fixture.context(),
        config,
        LocalFs,
        &mut host,
        &mut events,
        fixture.log(),
    );

    let listing = &events.seen[1].1;
    let kinds: Vec<_> = listing.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![SuggestionKind::NavigateParent, SuggestionKind::OpenFile]
    );
    assert_eq!(events.seen[2].0, "./");
    assert!(events.seen[2]
        .1
        .iter()
        .any(|r| r.kind == SuggestionKind::NavigateFolder && r.label == "src"));

    assert_eq!(
        outcome,
        Some(SessionOutcome::Completed(CreationOutcome::Opened {
            path: main.clone()
        }))
    );
    assert_eq!(host.opened, vec![main]);
}
