//! Session persistence and command-line tests

use std::fs;

use bubble_levels::cli::{run, Command, GeneratorArgs, LayoutArg, SessionAction};
use bubble_levels::core::{LevelStore, ProgressSnapshot};
use bubble_levels::session::{Session, SessionFile, SessionSource};
use bubble_levels::types::Layout;

const PACK: &str = "0 0 0 0 0 0 0 0\n\n1 1 1 1 1 1 1 1\n\n2 2 2 2 2 2 2 2\n";

fn run_to_string(command: Command) -> String {
    let mut out = Vec::new();
    run(command, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_missing_session_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let file = SessionFile::new(dir.path().join("missing.json"));
    assert!(file.load().unwrap().is_none());
}

#[test]
fn test_pack_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let pack = dir.path().join("levels.txt");
    fs::write(&pack, PACK).unwrap();

    let (mut session, mut store) = Session::pack(&pack, 0).unwrap();
    session.advance(&mut store);
    assert_eq!(session.progress, ProgressSnapshot::new(1, 0));

    let file = SessionFile::new(dir.path().join("session.json"));
    file.save(&session).unwrap();

    let loaded = file.load().unwrap().unwrap();
    assert_eq!(loaded, session);

    let mut reopened = loaded.open_store().unwrap();
    assert_eq!(reopened.index(), 1);
    assert_eq!(reopened.current_grid().map(|g| g.row(0)), Some([1; 8]));

    file.delete().unwrap();
    assert!(file.load().unwrap().is_none());
}

#[test]
fn test_random_session_replays_seed_chain() {
    let (mut session, mut store) = Session::random(42, 6, Layout::Arcade);
    session.advance(&mut store);
    session.advance(&mut store);

    match session.source {
        SessionSource::Random { generation, .. } => assert_eq!(generation, 2),
        _ => panic!("expected a random session"),
    }

    let mut reopened = session.open_store().unwrap();
    assert_eq!(reopened.seed(), store.seed());
    assert_eq!(reopened.offset(), store.offset());
    assert_eq!(reopened.current_grid().copied(), store.current_grid().copied());
}

#[test]
fn test_session_json_keeps_progress_field_names() {
    let (session, _) = Session::random(1, 4, Layout::Classic);
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["source"]["mode"], "random");
    assert_eq!(json["progress"]["currentIndex"], 0);
    assert_eq!(json["progress"]["rowOffset"], 0);
}

#[test]
fn test_malformed_session_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(SessionFile::new(path).load().is_err());
}

#[test]
fn test_missing_pack_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Session::pack(dir.path().join("nope.txt"), 0).is_err());
}

#[test]
fn test_cli_pack_prints_requested_level() {
    let dir = tempfile::tempdir().unwrap();
    let pack = dir.path().join("levels.txt");
    fs::write(&pack, PACK).unwrap();

    let text = run_to_string(Command::Pack {
        file: pack.clone(),
        level: 2,
        all: false,
    });
    assert!(text.starts_with("Level 3/3\n2 2 2 2 2 2 2 2\n"));

    let text = run_to_string(Command::Pack {
        file: pack,
        level: 0,
        all: true,
    });
    assert_eq!(text.matches("Level ").count(), 3);
}

#[test]
fn test_cli_rows_follow_the_store_feed() {
    let text = run_to_string(Command::Rows {
        generator: GeneratorArgs {
            seed: 42,
            difficulty: 4,
            layout: LayoutArg::Arcade,
        },
        count: 2,
    });
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["offset 1: 0 0 1 2 1 3 1 2", "offset 0: 1 1 1 0 0 3 2 1"]);

    let mut store = LevelStore::random(42, 4, Layout::Arcade);
    for line in lines {
        let row = store.new_row().unwrap();
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        assert_eq!(line, format!("offset {}: {}", store.offset(), cells.join(" ")));
    }
}

#[test]
fn test_delete_missing_session_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let file = SessionFile::new(dir.path().join("missing.json"));
    assert!(file.delete().is_ok());
}

#[test]
fn test_failed_delete_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("session.json");
    fs::create_dir(&state).unwrap();

    assert!(SessionFile::new(&state).delete().is_err());

    let mut out = Vec::new();
    let clear = Command::Session {
        state: state.clone(),
        action: SessionAction::Clear,
    };
    assert!(run(clear, &mut out).is_err());
    assert!(out.is_empty());
    assert!(state.exists());
}

#[test]
fn test_cli_session_walks_pack() {
    let dir = tempfile::tempdir().unwrap();
    let pack = dir.path().join("levels.txt");
    fs::write(&pack, PACK).unwrap();
    let state = dir.path().join("session.json");

    let session = |action| Command::Session {
        state: state.clone(),
        action,
    };

    run_to_string(session(SessionAction::NewPack {
        file: pack,
        level: 0,
    }));
    let text = run_to_string(session(SessionAction::Next));
    assert!(text.contains("Level 2/3"));
    let text = run_to_string(session(SessionAction::Show));
    assert!(text.contains("Level 2/3"));
    let text = run_to_string(session(SessionAction::First));
    assert!(text.contains("Level 1/3"));

    run_to_string(session(SessionAction::Clear));
    let mut out = Vec::new();
    assert!(run(session(SessionAction::Show), &mut out).is_err());
}
