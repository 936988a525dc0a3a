//! End-to-end coverage of the projects form: keyboard editing, focus
//! traversal, and mouse-driven button activation.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::common::harness::FormTestHarness;

// ========================
// Initial screen
// ========================

#[test]
fn test_initial_screen_shows_one_blank_project() {
    let harness = FormTestHarness::new(80, 24).unwrap();

    harness.assert_screen_contains(" Projects ");
    harness.assert_screen_contains("1 project");
    harness.assert_screen_contains("Project #1");
    harness.assert_screen_contains("[+ Add Project]");
    harness.assert_screen_contains("[+ Add Description]");
    harness.assert_screen_contains("Project Name");
    harness.assert_screen_contains("Duration");
    harness.assert_screen_contains("Technologies Used");
    // Single project, single bullet: no remove affordances anywhere.
    harness.assert_screen_not_contains("[x]");
}

#[test]
fn test_placeholders_shown_for_blank_project() {
    let harness = FormTestHarness::new(100, 24).unwrap();

    harness.assert_screen_contains("AI Math Solver");
    harness.assert_screen_contains("February 2025 - March 2025");
}

// ========================
// Keyboard editing
// ========================

#[test]
fn test_enter_adds_second_project() {
    let mut harness = FormTestHarness::new(80, 30).unwrap();

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.app().projects().len(), 2);
    harness.assert_screen_contains("2 projects");
    harness.assert_screen_contains("Project #2");
    // Two projects: each card now carries a remove button.
    harness.assert_screen_contains("[x]");
}

#[test]
fn test_typed_name_reaches_model_and_screen() {
    let mut harness = FormTestHarness::new(80, 30).unwrap();

    // Adding a project lands focus on the new project's name field.
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("Chess Engine").unwrap();

    assert_eq!(harness.app().projects()[1].name, "Chess Engine");
    harness.assert_screen_contains("Chess Engine");
}

#[test]
fn test_tab_traversal_reaches_first_field() {
    let mut harness = FormTestHarness::new(80, 24).unwrap();

    // The first key press focuses [+ Add Project], so one Tab reaches the
    // first project's name field (no remove button at singleton cardinality).
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("Visualizer").unwrap();

    assert_eq!(harness.app().projects()[0].name, "Visualizer");
}

#[test]
fn test_backspace_edits_focused_field() {
    let mut harness = FormTestHarness::new(80, 24).unwrap();

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("abc").unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();

    assert_eq!(harness.app().projects()[0].name, "ab");
}

// ========================
// Mouse
// ========================

#[test]
fn test_click_add_bullet_then_remove_it() {
    let mut harness = FormTestHarness::new(80, 30).unwrap();

    harness.click_on("[+ Add Description]").unwrap();
    assert_eq!(harness.app().projects()[0].bullets.len(), 2);
    // Two bullets: remove affordances appear.
    harness.assert_screen_contains("[x]");

    harness.click_on("[x]").unwrap();
    assert_eq!(harness.app().projects()[0].bullets.len(), 1);
    harness.assert_screen_not_contains("[x]");
}

#[test]
fn test_click_add_project_button() {
    let mut harness = FormTestHarness::new(80, 30).unwrap();

    harness.click_on("[+ Add Project]").unwrap();

    assert_eq!(harness.app().projects().len(), 2);
    harness.assert_screen_contains("Project #2");
}

#[test]
fn test_click_remove_project_card() {
    let mut harness = FormTestHarness::new(80, 30).unwrap();

    harness.click_on("[+ Add Project]").unwrap();
    assert_eq!(harness.app().projects().len(), 2);

    // The first [x] on screen is the first card's remove button.
    harness.click_on("[x]").unwrap();
    assert_eq!(harness.app().projects().len(), 1);
    harness.assert_screen_contains("1 project");
}
