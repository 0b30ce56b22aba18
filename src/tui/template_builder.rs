//! Template builder pane: template list, item list and item input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::editor::EditorMode;

/// Which part of the template builder receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderFocus {
    /// Saved template names
    #[default]
    Templates,
    /// Items of the template being edited
    Items,
    /// New item input line
    Input,
}

impl BuilderFocus {
    /// Next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Templates => Self::Items,
            Self::Items => Self::Input,
            Self::Input => Self::Templates,
        }
    }
}

/// Cursor and focus state of the template builder.
#[derive(Debug, Clone, Default)]
pub struct BuilderUiState {
    /// Focused pane
    pub focus: BuilderFocus,
    /// Highlighted row in the template list
    pub template_cursor: usize,
    /// Highlighted row in the item list
    pub item_cursor: usize,
}

impl BuilderUiState {
    /// Keeps the template cursor inside a list of `len` names.
    pub fn clamp_templates(&mut self, len: usize) {
        self.template_cursor = self.template_cursor.min(len.saturating_sub(1));
    }

    /// Keeps the item cursor inside a list of `len` items.
    pub fn clamp_items(&mut self, len: usize) {
        self.item_cursor = self.item_cursor.min(len.saturating_sub(1));
    }
}

fn pane_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.accent } else { theme.primary };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

/// Render the template builder pane
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_template_list(f, columns[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(columns[1]);

    render_item_list(f, right[0], state);
    render_input(f, right[1], state);
}

fn render_template_list(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let selected = state.editor.selected();
    let names = state.repository.names();

    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            let mut spans = vec![Span::styled(name.as_str(), Style::default().fg(theme.text))];
            if state.repository.is_staged(name) {
                spans.push(Span::styled(" *", Style::default().fg(theme.warning)));
            }
            let style = if selected == Some(name.as_str()) {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let focused = state.builder.focus == BuilderFocus::Templates;
    let list = List::new(items)
        .block(pane_block(" Templates ", focused, theme))
        .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !names.is_empty() {
        list_state.select(Some(state.builder.template_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_item_list(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let editing = state.editor.editing();

    let title = match state.editor.mode() {
        EditorMode::Creating => " Items (new template) ".to_string(),
        EditorMode::Browsing {
            selected: Some(name),
        } => format!(" Items: {name} "),
        EditorMode::Browsing { selected: None } => " Items ".to_string(),
    };

    let items: Vec<ListItem> = state
        .editor
        .items()
        .iter()
        .map(|entry| match editing {
            Some(edit) if edit.key == entry.key => ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}_", edit.text),
                    Style::default().fg(theme.accent).bg(theme.field_bg),
                ),
                Span::styled("  Enter save, Esc cancel", Style::default().fg(theme.text_muted)),
            ])),
            _ => ListItem::new(Span::styled(
                entry.item.text.as_str(),
                Style::default().fg(theme.text),
            )),
        })
        .collect();

    let focused = state.builder.focus == BuilderFocus::Items;
    let list = List::new(items)
        .block(pane_block(&title, focused, theme))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused && !state.editor.items().is_empty() {
        list_state.select(Some(state.builder.item_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_input(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.builder.focus == BuilderFocus::Input;
    let text = if focused {
        Span::styled(format!("{}_", state.editor.input()), Style::default().fg(theme.text))
    } else if state.editor.input().is_empty() {
        Span::styled("Add item (use \\t for a blank)", Style::default().fg(theme.text_muted))
    } else {
        Span::styled(state.editor.input(), Style::default().fg(theme.text))
    };

    let input = Paragraph::new(Line::from(text)).block(pane_block(" New Item ", focused, theme));
    f.render_widget(input, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let focus = BuilderFocus::default();
        assert_eq!(focus, BuilderFocus::Templates);
        assert_eq!(focus.next().next().next(), BuilderFocus::Templates);
    }

    #[test]
    fn test_cursor_clamp() {
        let mut ui = BuilderUiState {
            template_cursor: 5,
            item_cursor: 3,
            ..Default::default()
        };
        ui.clamp_templates(2);
        ui.clamp_items(0);
        assert_eq!(ui.template_cursor, 1);
        assert_eq!(ui.item_cursor, 0);
    }
}
