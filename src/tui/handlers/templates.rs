//! Template builder input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use super::{handle_global_key, move_cursor};
use crate::editor::SaveOutcome;
use crate::tui::{AppState, BuilderFocus};

/// Handle input for the template builder pane
pub fn handle_template_builder_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.editor.editing().is_some() {
        handle_item_edit_input(state, key);
        return Ok(false);
    }

    if state.builder.focus == BuilderFocus::Input {
        handle_new_item_input(state, key);
        return Ok(false);
    }

    if let Some(quit) = handle_global_key(state, key) {
        return Ok(quit);
    }

    match key.code {
        KeyCode::Tab => {
            state.builder.focus = state.builder.focus.next();
        }
        KeyCode::Char('n') => {
            state.editor.new_template();
            state.builder.item_cursor = 0;
            state.builder.focus = BuilderFocus::Input;
            state.set_status("New template: add items, then press s to save");
        }
        KeyCode::Char('s') => save_template(state),
        KeyCode::Char('a') => state.open_save_as_prompt(),
        KeyCode::Char('x') => delete_template(state),
        KeyCode::Char('i') => state.open_import_prompt(),
        KeyCode::Char('o') => export_template(state),
        _ => match state.builder.focus {
            BuilderFocus::Templates => handle_template_list_input(state, key.code),
            BuilderFocus::Items => handle_item_list_input(state, key.code),
            BuilderFocus::Input => {}
        },
    }
    Ok(false)
}

fn handle_template_list_input(state: &mut AppState, code: KeyCode) {
    let names = state.repository.names();
    if move_cursor(&mut state.builder.template_cursor, names.len(), code) {
        return;
    }

    match code {
        KeyCode::Enter => {
            let Some(name) = names.get(state.builder.template_cursor) else {
                return;
            };
            match state.editor.select_template(&state.repository, name) {
                Ok(()) => {
                    state.builder.item_cursor = 0;
                    state.set_status(format!("Editing template '{name}'"));
                }
                Err(e) => state.report(&e),
            }
        }
        KeyCode::Esc => {
            state.editor.clear_selection();
            state.set_status("Selection cleared");
        }
        _ => {}
    }
}

fn handle_item_list_input(state: &mut AppState, code: KeyCode) {
    let len = state.editor.items().len();
    if move_cursor(&mut state.builder.item_cursor, len, code) {
        return;
    }

    let Some(item_key) = state.editor.key_at(state.builder.item_cursor) else {
        return;
    };
    match code {
        KeyCode::Enter | KeyCode::Char('e') => {
            state.editor.begin_edit(item_key);
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            if let Some(item) = state.editor.delete_item(item_key) {
                state.builder.clamp_items(state.editor.items().len());
                state.set_status(format!("Removed item '{}'", item.text));
            }
        }
        KeyCode::Esc => {
            state.builder.focus = BuilderFocus::Templates;
        }
        _ => {}
    }
}

fn handle_new_item_input(state: &mut AppState, key: event::KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if state.editor.add_item().is_some() {
                state.builder.item_cursor = state.editor.items().len().saturating_sub(1);
            }
        }
        KeyCode::Esc | KeyCode::Tab => {
            state.builder.focus = state.builder.focus.next();
        }
        KeyCode::Backspace => {
            state.editor.input_mut().pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.editor.input_mut().clear();
        }
        KeyCode::Char(c) => {
            state.editor.input_mut().push(c);
        }
        _ => {}
    }
}

fn handle_item_edit_input(state: &mut AppState, key: event::KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            state.editor.save_edit();
        }
        KeyCode::Esc => state.editor.cancel_edit(),
        KeyCode::Backspace => {
            if let Some(text) = state.editor.edit_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = state.editor.edit_text_mut() {
                text.push(c);
            }
        }
        _ => {}
    }
}

/// Points the template cursor at the editor's selected template.
pub(crate) fn sync_template_cursor(state: &mut AppState) {
    let names = state.repository.names();
    if let Some(index) = state
        .editor
        .selected()
        .and_then(|selected| names.iter().position(|name| name == selected))
    {
        state.builder.template_cursor = index;
    } else {
        state.builder.clamp_templates(names.len());
    }
}

fn save_template(state: &mut AppState) {
    match state.editor.save(&mut state.repository) {
        Ok(SaveOutcome::Saved(name)) => {
            sync_template_cursor(state);
            state.set_success(format!("Template '{name}' saved"));
        }
        Ok(SaveOutcome::NeedsName) => state.open_save_as_prompt(),
        Ok(SaveOutcome::Cancelled) => {}
        Err(e) => state.report(&e),
    }
}

fn delete_template(state: &mut AppState) {
    match state.editor.delete_template(&mut state.repository) {
        Ok(name) => {
            state.builder.item_cursor = 0;
            sync_template_cursor(state);
            state.set_success(format!("Template '{name}' deleted"));
        }
        Err(e) => state.report(&e),
    }
}

fn export_template(state: &mut AppState) {
    match state.editor.export(&state.repository, &state.export_dir) {
        Ok(path) => state.set_success(format!("Exported to {}", path.display())),
        Err(e) => state.report(&e),
    }
}
