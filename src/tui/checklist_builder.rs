//! Checklist builder pane: template picker and the fillable checklist.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::AppState;
use crate::checklist::{ChecklistRow, Segment};
use crate::tui::Theme;

/// Which part of the checklist builder receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecklistFocus {
    /// Template picker
    #[default]
    Templates,
    /// Checklist rows
    Rows,
}

/// Cursor and focus state of the checklist builder.
#[derive(Debug, Clone, Default)]
pub struct ChecklistUiState {
    /// Focused pane
    pub focus: ChecklistFocus,
    /// Highlighted template name
    pub template_cursor: usize,
    /// Highlighted checklist row
    pub row_cursor: usize,
    /// Blank being filled in the highlighted row
    pub filling: Option<usize>,
}

impl ChecklistUiState {
    /// Keeps the template cursor inside a list of `len` names.
    pub fn clamp(&mut self, len: usize) {
        self.template_cursor = self.template_cursor.min(len.saturating_sub(1));
    }
}

/// Render the checklist builder pane
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_picker(f, columns[0], state);
    render_checklist(f, columns[1], state);
}

fn render_picker(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let names = state.repository.names();
    let selected = state.checklist.selected();

    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            let style = if selected == Some(name.as_str()) {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(name.as_str()).style(style)
        })
        .collect();

    let focused = state.checklist_ui.focus == ChecklistFocus::Templates;
    let border = if focused { theme.accent } else { theme.primary };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Template ")
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !names.is_empty() {
        list_state.select(Some(state.checklist_ui.template_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_checklist(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.checklist_ui.focus == ChecklistFocus::Rows;
    let border = if focused { theme.accent } else { theme.primary };

    let title = match state.checklist.selected() {
        Some(name) if state.checklist.is_visible() => format!(
            " {name} ({}/{}) ",
            state.checklist.checked_count(),
            state.checklist.rows().len()
        ),
        _ => " Checklist ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border));

    if !state.checklist.is_visible() {
        let hint = if state.checklist.selected().is_some() {
            "Press c to create the checklist"
        } else {
            "Select a template with Enter"
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .checklist
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let filling = if focused && index == state.checklist_ui.row_cursor {
                state.checklist_ui.filling
            } else {
                None
            };
            ListItem::new(row_line(row, filling, theme))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused && !state.checklist.rows().is_empty() {
        list_state.select(Some(state.checklist_ui.row_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Builds the styled line for one row: checkbox, text and input blanks.
fn row_line<'a>(row: &'a ChecklistRow, filling: Option<usize>, theme: &Theme) -> Line<'a> {
    let (checkbox, color) = if row.checked {
        ("[x]", theme.success)
    } else {
        ("[ ]", theme.text)
    };
    let mut spans = vec![Span::styled(checkbox, Style::default().fg(color))];

    let mut blank_index = 0;
    for segment in &row.segments {
        spans.push(Span::raw(" "));
        match segment {
            Segment::Text(text) => {
                spans.push(Span::styled(text.as_str(), Style::default().fg(theme.text)));
            }
            Segment::Blank => {
                let value = row.blanks.get(blank_index).map_or("", String::as_str);
                let active = filling == Some(blank_index);
                let shown = match (active, value.is_empty()) {
                    (true, _) => format!("{value}_"),
                    (false, true) => "______".to_string(),
                    (false, false) => value.to_string(),
                };
                let fg = if active { theme.accent } else { theme.text };
                spans.push(Span::styled(
                    shown,
                    Style::default().fg(fg).bg(theme.field_bg),
                ));
                blank_index += 1;
            }
        }
    }
    Line::from(spans)
}
