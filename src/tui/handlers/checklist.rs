//! Checklist builder input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use super::{handle_global_key, move_cursor};
use crate::tui::{AppState, ChecklistFocus};

/// Handle input for the checklist builder pane
pub fn handle_checklist_builder_input(
    state: &mut AppState,
    key: event::KeyEvent,
) -> Result<bool> {
    if state.checklist_ui.filling.is_some() {
        handle_fill_input(state, key.code);
        return Ok(false);
    }

    if let Some(quit) = handle_global_key(state, key) {
        return Ok(quit);
    }

    match key.code {
        KeyCode::Tab => {
            state.checklist_ui.focus = match state.checklist_ui.focus {
                ChecklistFocus::Templates if state.checklist.is_visible() => ChecklistFocus::Rows,
                _ => ChecklistFocus::Templates,
            };
        }
        KeyCode::Char('c') => create_checklist(state),
        _ => match state.checklist_ui.focus {
            ChecklistFocus::Templates => handle_picker_input(state, key.code),
            ChecklistFocus::Rows => handle_row_input(state, key.code),
        },
    }
    Ok(false)
}

fn handle_picker_input(state: &mut AppState, code: KeyCode) {
    let names = state.repository.names();
    if move_cursor(&mut state.checklist_ui.template_cursor, names.len(), code) {
        return;
    }

    match code {
        KeyCode::Enter => {
            if let Some(name) = names.get(state.checklist_ui.template_cursor) {
                state.checklist.select_template(Some(name.as_str()));
                state.checklist_ui.row_cursor = 0;
                state.set_status(format!("Selected '{name}', press c to create the checklist"));
            }
        }
        KeyCode::Esc => {
            state.checklist.select_template(None);
            state.set_status("Selection cleared");
        }
        _ => {}
    }
}

fn handle_row_input(state: &mut AppState, code: KeyCode) {
    let len = state.checklist.rows().len();
    if move_cursor(&mut state.checklist_ui.row_cursor, len, code) {
        return;
    }

    let row = state.checklist_ui.row_cursor;
    match code {
        KeyCode::Char(' ' | 'x') => {
            state.checklist.toggle(row);
        }
        KeyCode::Enter | KeyCode::Char('f') => {
            let has_blanks = state
                .checklist
                .rows()
                .get(row)
                .is_some_and(|r| !r.blanks.is_empty());
            if has_blanks {
                state.checklist_ui.filling = Some(0);
            }
        }
        KeyCode::Char('r') => {
            state.checklist.reset();
            state.set_status("All checkboxes cleared");
        }
        KeyCode::Esc => {
            state.checklist_ui.focus = ChecklistFocus::Templates;
        }
        _ => {}
    }
}

fn handle_fill_input(state: &mut AppState, code: KeyCode) {
    let row = state.checklist_ui.row_cursor;
    let Some(blank) = state.checklist_ui.filling else {
        return;
    };

    match code {
        KeyCode::Tab => {
            let count = state.checklist.rows().get(row).map_or(0, |r| r.blanks.len());
            state.checklist_ui.filling = Some((blank + 1) % count.max(1));
        }
        KeyCode::Enter | KeyCode::Esc => {
            state.checklist_ui.filling = None;
        }
        KeyCode::Backspace => {
            if let Some(value) = state.checklist.blank_mut(row, blank) {
                value.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(value) = state.checklist.blank_mut(row, blank) {
                value.push(c);
            }
        }
        _ => {}
    }
}

fn create_checklist(state: &mut AppState) {
    if state.checklist.build_checklist(state.repository.collection()) {
        state.checklist_ui.row_cursor = 0;
        state.checklist_ui.filling = None;
        state.checklist_ui.focus = ChecklistFocus::Rows;
        let name = state.checklist.selected().unwrap_or_default().to_string();
        state.set_status(format!("Checklist created from '{name}'"));
    } else {
        state.set_warning("Please select a template to create a checklist!");
    }
}
