use std::io::Cursor;

use assert_cmd::Command;
use predicates::prelude::*;

use cliput_lib::backend::MemoryBackend;
use cliput_lib::edit::edit_from_reader;
use cliput_lib::{ClipboardError, ClipboardSession};

#[test]
fn integration_set_get_round_trip() {
    // Drive a full session against the in-memory backend end to end.
    let mut session = ClipboardSession::with_backend(MemoryBackend::new());
    session.set_text("round trip").expect("set");
    assert_eq!(session.get_text().expect("get"), "round trip");
    assert!(session.is_closed());
}

#[test]
fn integration_edit_loop_builds_multiline_text() {
    let mut session = ClipboardSession::with_backend(MemoryBackend::new());
    edit_from_reader(&mut session, Cursor::new("a\nb\nc\n")).expect("edit");
    assert_eq!(session.get_text().expect("get"), "a\nb\nc");
}

#[test]
fn integration_sentinel_keeps_earlier_writes() {
    let mut session = ClipboardSession::with_backend(MemoryBackend::new());
    edit_from_reader(&mut session, Cursor::new("a\n\0bad\n")).expect("edit");
    assert_eq!(session.get_text().expect("get"), "a");
}

#[test]
fn integration_empty_clipboard_reports_no_data() {
    let mut session = ClipboardSession::with_backend(MemoryBackend::new());
    session.clear().expect("clear");
    assert!(matches!(session.get_text(), Err(ClipboardError::NoData)));
}

#[test]
fn cli_help_mentions_edit_subcommand() {
    Command::cargo_bin("cliput")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("edit"));
}

#[test]
fn cli_rejects_unknown_arguments() {
    Command::cargo_bin("cliput")
        .expect("binary")
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
