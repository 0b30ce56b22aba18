//! Input handler modules for the two builder panes and popups.

pub mod checklist;
pub mod popups;
pub mod templates;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::{AppMode, AppState};

// Re-export handler functions
pub use checklist::handle_checklist_builder_input;
pub use popups::handle_popup_input;
pub use templates::handle_template_builder_input;

/// Moves a list cursor one step up or down within `len` rows.
pub(crate) fn move_cursor(cursor: &mut usize, len: usize, code: KeyCode) -> bool {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if *cursor + 1 < len {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = len.saturating_sub(1);
            true
        }
        _ => false,
    }
}

/// Handles keys shared by both panes. Returns `Some(quit)` when consumed.
pub(crate) fn handle_global_key(state: &mut AppState, key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('q') => Some(true),
        KeyCode::Char('1') | KeyCode::F(1) => {
            state.switch_mode(AppMode::TemplateBuilder);
            state.set_status("Create Template");
            Some(false)
        }
        KeyCode::Char('2') | KeyCode::F(2) => {
            state.switch_mode(AppMode::ChecklistBuilder);
            state.set_status("Create Checklist");
            Some(false)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_bounds() {
        let mut cursor = 0;
        move_cursor(&mut cursor, 3, KeyCode::Up);
        assert_eq!(cursor, 0);
        move_cursor(&mut cursor, 3, KeyCode::Down);
        move_cursor(&mut cursor, 3, KeyCode::Down);
        move_cursor(&mut cursor, 3, KeyCode::Down);
        assert_eq!(cursor, 2);
        move_cursor(&mut cursor, 3, KeyCode::Home);
        assert_eq!(cursor, 0);
        assert!(!move_cursor(&mut cursor, 3, KeyCode::Enter));
    }
}
