//! End-to-end flow: feed file → load → initial address → transitions → address.

use docfinder::infrastructure::{Location, MemoryLocation};
use docfinder::store::{self, FileSource, LoadState};
use docfinder::ui::{parse_command, render, Command};
use docfinder::{handle_event, initialize, Action, AppState, Config, DirectoryError, Event, SortKey};
use std::io::Write;

const MALFORMED_FEED: &str = r#"[
    {"id": "1", "name": "Dr. Alice Rao", "speciality": "Cardiology",
     "fees": "ignored", "experience": 5, "consultation_type": "video"}
]"#;

const GOOD_FEED: &str = r#"[
    {"id": "1", "name": "Dr. Alice Rao", "speciality": "Cardiology",
     "fees": 100, "experience": 5, "consultation_type": "video"},
    {"id": 2, "name": "Dr. Bob Iyer", "speciality": ["Dermatology", "Allergy"],
     "fees": 50, "experience": 10, "consultation_type": "inClinic"},
    {"id": "3", "name": "Dr. Alina Shah", "speciality": ["Cardiology"],
     "fees": 50, "experience": 8, "consultation_type": "Video"},
    {"name": "Dr. Chen", "fees": 300, "experience": 2, "consultation_type": "inClinic"}
]"#;

fn feed_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Runs an event and applies its actions the way the binary does.
async fn dispatch(
    state: &mut AppState,
    source: &FileSource,
    location: &mut MemoryLocation,
    event: Event,
) {
    let mut pending = vec![event];
    while let Some(event) = pending.pop() {
        let (_, actions) = handle_event(state, &event).unwrap();
        for action in actions {
            match action {
                Action::FetchDirectory => {
                    let outcome = store::load(source).await.map_err(|e| e.to_string());
                    pending.push(Event::DirectoryLoaded(outcome));
                }
                Action::PushQuery(query) => location.push_query(&query),
            }
        }
    }
}

fn names(state: &AppState) -> Vec<&str> {
    state.visible.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn shared_link_reproduces_view_after_load() {
    let file = feed_file(GOOD_FEED);
    let source = FileSource::new(file.path());
    let initial = "specialities=Cardiology&sortBy=fees";
    let mut location = MemoryLocation::new("/", initial);
    let mut state = initialize(&Config::default(), location.current_query());

    dispatch(&mut state, &source, &mut location, Event::Reload).await;

    assert_eq!(names(&state), ["Dr. Alina Shah", "Dr. Alice Rao"]);
    assert_eq!(state.query.sort_key, SortKey::FeeAscending);
    assert_eq!(location.href(), "/?specialities=Cardiology&sortBy=fee-ascending");
    assert_eq!(
        state.store.categories().iter().map(String::as_str).collect::<Vec<_>>(),
        ["Allergy", "Cardiology", "Dermatology"]
    );
}

#[tokio::test]
async fn commands_drive_transitions_and_address() {
    let file = feed_file(GOOD_FEED);
    let source = FileSource::new(file.path());
    let mut location = MemoryLocation::new("/", "");
    let mut state = initialize(&Config::default(), "");
    dispatch(&mut state, &source, &mut location, Event::Reload).await;
    assert_eq!(state.visible.len(), 4);

    for line in ["search ali", "pick 2", "mode video", "sort experience"] {
        let Command::Event(event) = parse_command(line).unwrap() else {
            panic!("{line} should be an event");
        };
        dispatch(&mut state, &source, &mut location, event).await;
    }

    assert_eq!(names(&state), ["Dr. Alina Shah"]);
    assert!(state.suggestions.is_empty());
    assert_eq!(
        location.current_query(),
        "name=Dr.+Alina+Shah&consultationType=video&sortBy=experience-descending"
    );
    assert_eq!(
        location.entries(),
        [
            "",
            "name=ali",
            "name=Dr.+Alina+Shah",
            "name=Dr.+Alina+Shah&consultationType=video",
            "name=Dr.+Alina+Shah&consultationType=video&sortBy=experience-descending",
        ]
    );

    let text = render(&state);
    assert!(text.contains("- Dr. Alina Shah\n  Cardiology | 8 years experience | ₹50\n"));
    assert!(text.contains("Address: /?name=Dr.+Alina+Shah"));
}

#[tokio::test]
async fn malformed_feed_fails_and_reload_recovers() {
    let file = feed_file(MALFORMED_FEED);
    let source = FileSource::new(file.path());
    let mut location = MemoryLocation::new("/", "name=bob");
    let mut state = initialize(&Config::default(), "name=bob");

    dispatch(&mut state, &source, &mut location, Event::Reload).await;
    assert!(matches!(state.store.state(), LoadState::Failed(_)));
    assert!(state.visible.is_empty());
    assert!(state.has_pending_query());
    assert!(render(&state).contains("Error loading doctors: "));
    assert_eq!(location.entries(), ["name=bob"]);

    std::fs::write(file.path(), GOOD_FEED).unwrap();
    dispatch(&mut state, &source, &mut location, Event::Reload).await;
    assert_eq!(names(&state), ["Dr. Bob Iyer"]);
    assert_eq!(location.entries(), ["name=bob"]);
}

#[tokio::test]
async fn missing_feed_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("absent.json"));
    assert!(matches!(store::load(&source).await, Err(DirectoryError::Io(_))));
}
