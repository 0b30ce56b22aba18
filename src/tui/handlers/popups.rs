//! Popup input handlers.

use anyhow::Result;
use crossterm::event;
use std::path::Path;

use super::templates::sync_template_cursor;
use crate::editor::SaveOutcome;
use crate::tui::{ActiveComponent, AppState, BuilderFocus, Component, ComponentEvent};

/// Route input to the open popup and act on its result
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let event = match state.active_component.as_mut() {
        Some(ActiveComponent::SaveAsPrompt(prompt) | ActiveComponent::ImportPrompt(prompt)) => {
            prompt.handle_input(key)
        }
        None => None,
    };
    let Some(event) = event else {
        return Ok(false);
    };

    let Some(component) = state.active_component.take() else {
        return Ok(false);
    };

    match (component, event) {
        (ActiveComponent::SaveAsPrompt(_), ComponentEvent::Submitted(name)) => {
            finish_save_as(state, Some(&name));
        }
        (ActiveComponent::SaveAsPrompt(_), ComponentEvent::Cancelled) => {
            finish_save_as(state, None);
        }
        (ActiveComponent::ImportPrompt(_), ComponentEvent::Submitted(path)) => {
            finish_import(state, path.trim());
        }
        (ActiveComponent::ImportPrompt(_), ComponentEvent::Cancelled) => {
            state.set_status("Import cancelled");
        }
    }
    Ok(false)
}

fn finish_save_as(state: &mut AppState, name: Option<&str>) {
    match state.editor.save_as(&mut state.repository, name) {
        Ok(SaveOutcome::Saved(name)) => {
            sync_template_cursor(state);
            state.set_success(format!("Template '{name}' saved"));
        }
        Ok(SaveOutcome::Cancelled | SaveOutcome::NeedsName) => {
            state.set_status("Save cancelled");
        }
        Err(e) => state.report(&e),
    }
}

fn finish_import(state: &mut AppState, path: &str) {
    if path.is_empty() {
        state.set_status("Import cancelled");
        return;
    }

    match state.editor.import_file(&mut state.repository, Path::new(path)) {
        Ok(name) => {
            sync_template_cursor(state);
            state.builder.item_cursor = 0;
            state.builder.focus = BuilderFocus::Items;
            state.set_warning(format!("Imported '{name}' (unsaved, press s to save)"));
        }
        Err(e) => state.report(&e),
    }
}
