#![allow(missing_docs)]
//! Drives the TUI state machine with key events, without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lazychecklist::config::{Config, ThemeMode};
use lazychecklist::services::TemplateRepository;
use lazychecklist::store::{KeyValueStore, MemoryStore};
use lazychecklist::tui::{
    handle_key_event, ActiveComponent, AppMode, AppState, BuilderFocus, ChecklistFocus,
};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn state_with(entries: &[(&str, &str)]) -> AppState {
    let store = MemoryStore::with_entries(entries.iter().map(|(k, v)| (*k, *v)));
    let store: Box<dyn KeyValueStore> = Box::new(store);
    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Dark;
    AppState::new(config, TemplateRepository::new(store).unwrap())
}

fn press(state: &mut AppState, code: KeyCode) -> bool {
    handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_create_and_save_new_template() {
    let mut state = state_with(&[]);

    press(&mut state, KeyCode::Char('n'));
    assert!(state.editor.is_creating());
    assert_eq!(state.builder.focus, BuilderFocus::Input);

    type_text(&mut state, "Pack charger");
    press(&mut state, KeyCode::Enter);
    type_text(&mut state, "Seat:\\t");
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.editor.items().len(), 2);

    // Leave the input, then save: a name is required
    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Char('s'));
    assert!(matches!(
        state.active_component,
        Some(ActiveComponent::SaveAsPrompt(_))
    ));

    type_text(&mut state, "travel");
    press(&mut state, KeyCode::Enter);
    assert!(state.active_component.is_none());
    assert_eq!(state.editor.selected(), Some("travel"));
    assert_eq!(
        state.repository.get("travel").unwrap(),
        items(&["Pack charger", "Seat:\\t"]).as_slice()
    );
}

#[test]
fn test_save_with_nothing_selected_warns() {
    let mut state = state_with(&[]);
    press(&mut state, KeyCode::Char('s'));

    assert!(state.error_message.is_none());
    assert_eq!(state.status_message, "Please select a template to save!");
    assert!(state.repository.names().is_empty());
}

#[test]
fn test_blank_save_as_is_cancel() {
    let template = template_json(&["Milk"]);
    let mut state = state_with(&[("template:groceries", template.as_str())]);

    press(&mut state, KeyCode::Char('a'));
    // Clear the prefilled name and submit nothing
    handle_key_event(
        &mut state,
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
    )
    .unwrap();
    press(&mut state, KeyCode::Enter);

    assert!(state.active_component.is_none());
    assert_eq!(state.status_message, "Save cancelled");
    assert_eq!(state.repository.names(), vec!["groceries".to_string()]);
}

#[test]
fn test_edit_and_delete_items() {
    let template = template_json(&["Milk", "Eggs", "Bread"]);
    let mut state = state_with(&[("template:groceries", template.as_str())]);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.editor.selected(), Some("groceries"));

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.builder.focus, BuilderFocus::Items);

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char('e'));
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    type_text(&mut state, "Oats");
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Char('d'));

    assert_eq!(state.editor.checklist_items(), items(&["Oats", "Bread"]));
    // Nothing is persisted until save
    assert_eq!(
        state.repository.get("groceries").unwrap(),
        items(&["Milk", "Eggs", "Bread"]).as_slice()
    );

    press(&mut state, KeyCode::Char('s'));
    assert_eq!(
        state.repository.get("groceries").unwrap(),
        items(&["Oats", "Bread"]).as_slice()
    );
}

#[test]
fn test_import_prompt_stages_template() {
    let files = TempDir::new().unwrap();
    let file = write_template_file(files.path(), "camping.json", &["Tent"]);
    let mut state = state_with(&[]);

    press(&mut state, KeyCode::Char('i'));
    type_text(&mut state, file.to_str().unwrap());
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.editor.selected(), Some("camping"));
    assert!(state.repository.is_staged("camping"));

    press(&mut state, KeyCode::Char('s'));
    assert!(!state.repository.is_staged("camping"));
}

#[test]
fn test_import_of_missing_file_shows_error_overlay() {
    let mut state = state_with(&[]);

    press(&mut state, KeyCode::Char('i'));
    type_text(&mut state, "/nonexistent/list.json");
    press(&mut state, KeyCode::Enter);

    assert!(state.error_message.is_some());
    // Other keys are ignored until the overlay is dismissed
    assert!(!press(&mut state, KeyCode::Char('q')));
    press(&mut state, KeyCode::Esc);
    assert!(state.error_message.is_none());
    assert!(press(&mut state, KeyCode::Char('q')));
}

#[test]
fn test_checklist_mode_fill_toggle_and_reset() {
    let template = template_json(&["Name:\\t", "Done"]);
    let mut state = state_with(&[("template:intake", template.as_str())]);

    press(&mut state, KeyCode::Char('2'));
    assert_eq!(state.mode, AppMode::ChecklistBuilder);

    // Creating without a selection only warns
    press(&mut state, KeyCode::Char('c'));
    assert!(!state.checklist.is_visible());

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('c'));
    assert!(state.checklist.is_visible());
    assert_eq!(state.checklist_ui.focus, ChecklistFocus::Rows);

    press(&mut state, KeyCode::Char('f'));
    type_text(&mut state, "Ada");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.checklist.checked_count(), 2);

    press(&mut state, KeyCode::Char('r'));
    assert_eq!(state.checklist.checked_count(), 0);
    assert_eq!(state.checklist.rows()[0].blanks, vec!["Ada".to_string()]);
}

#[test]
fn test_template_saved_in_builder_is_visible_to_checklist() {
    let mut state = state_with(&[]);

    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Lock door");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "leaving");
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('c'));
    assert_eq!(state.checklist.selected(), Some("leaving"));
    assert_eq!(state.checklist.rows().len(), 1);
}

#[test]
fn test_deleting_template_drops_its_checklist() {
    let template = template_json(&["Lock door"]);
    let mut state = state_with(&[("template:leaving", template.as_str())]);

    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('c'));
    assert!(state.checklist.is_visible());

    press(&mut state, KeyCode::Char('1'));
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('x'));
    assert!(!state.repository.contains("leaving"));

    press(&mut state, KeyCode::Char('2'));
    assert_eq!(state.checklist.selected(), None);
    assert!(!state.checklist.is_visible());
    assert!(state.checklist.rows().is_empty());
    assert_eq!(state.checklist_ui.focus, ChecklistFocus::Templates);
}
