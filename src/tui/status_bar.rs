//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppMode, AppState, BuilderFocus, ChecklistFocus, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error),
            ]));
        } else if let Some(color) = state.status_color_override {
            lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(color),
            )));
        } else {
            lines.push(Line::from(state.status_message.as_str()));
        }

        lines.push(Self::help_line(state, theme));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(paragraph, area);
    }

    /// Key hints for the focused pane.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let pairs: &[(&str, &str)] = match state.mode {
            AppMode::TemplateBuilder if state.editor.editing().is_some() => {
                &[("Enter", "save item"), ("Esc", "cancel")]
            }
            AppMode::TemplateBuilder => match state.builder.focus {
                BuilderFocus::Templates => &[
                    ("Enter", "open"),
                    ("n", "new"),
                    ("s", "save"),
                    ("a", "save as"),
                    ("x", "delete"),
                    ("i", "import"),
                    ("o", "export"),
                ],
                BuilderFocus::Items => &[("e", "edit"), ("d", "delete item"), ("s", "save")],
                BuilderFocus::Input => &[("Enter", "add item"), ("Esc", "leave input")],
            },
            AppMode::ChecklistBuilder if state.checklist_ui.filling.is_some() => {
                &[("Tab", "next blank"), ("Enter/Esc", "done")]
            }
            AppMode::ChecklistBuilder => match state.checklist_ui.focus {
                ChecklistFocus::Templates => &[("Enter", "select"), ("c", "create checklist")],
                ChecklistFocus::Rows => &[
                    ("Space", "toggle"),
                    ("f", "fill blanks"),
                    ("r", "reset"),
                ],
            },
        };

        // Inline editing swallows the global keys
        let modal = state.editor.editing().is_some() || state.checklist_ui.filling.is_some();
        let globals: &[(&str, &str)] = if modal {
            &[]
        } else {
            &[("Tab", "pane"), ("1/2", "mode"), ("q", "quit")]
        };

        let mut spans = Vec::new();
        for &(key, action) in pairs.iter().chain(globals) {
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {action}  "),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
