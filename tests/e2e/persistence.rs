//! End-to-end coverage of loading and saving the backing JSON file.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::common::harness::FormTestHarness;

#[test]
fn test_save_writes_file_and_clears_modified_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");

    let mut harness = FormTestHarness::with_file(Some(path.clone()), 100, 30).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("Ray Tracer").unwrap();
    harness.assert_screen_contains("modified");

    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(path.exists());
    assert!(!harness.app().is_dirty());
    harness.assert_screen_contains("saved");
    harness.assert_screen_not_contains("modified");
}

#[test]
fn test_saved_file_loads_back_into_fresh_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");

    let mut harness = FormTestHarness::with_file(Some(path.clone()), 100, 30).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("Ray Tracer").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    let reloaded = FormTestHarness::with_file(Some(path), 100, 30).unwrap();
    assert_eq!(reloaded.app().projects().len(), 2);
    assert_eq!(reloaded.app().projects()[1].name, "Ray Tracer");
    reloaded.assert_screen_contains("Ray Tracer");
    reloaded.assert_screen_contains("2 projects");
}

#[test]
fn test_loading_legacy_file_repairs_empty_bullet_lists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"[{"id":"9","name":"Old","technologies":"C","duration":"2024","bullets":[]}]"#,
    )
    .unwrap();

    let harness = FormTestHarness::with_file(Some(path), 100, 30).unwrap();
    assert_eq!(harness.app().projects()[0].bullets, vec![String::new()]);
    harness.assert_screen_contains("Old");
}

#[test]
fn test_save_without_file_reports_status() {
    let mut harness = FormTestHarness::new(100, 30).unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("no file to save to");
}
