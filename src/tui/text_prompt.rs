//! Modal single-line text prompt.
//!
//! Used for naming a template on Save As and for entering an import path.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};

/// A titled text input popup.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    title: String,
    message: String,
    value: String,
}

impl TextPrompt {
    /// Creates a prompt with an initial value.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            value: value.into(),
        }
    }

    /// Current input text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Component for TextPrompt {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Some(ComponentEvent::Submitted(self.value.clone())),
            (KeyCode::Esc, _) => Some(ComponentEvent::Cancelled),
            (KeyCode::Backspace, _) => {
                self.value.pop();
                None
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.value.clear();
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.value.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 30, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Message
                Constraint::Length(3), // Input
                Constraint::Min(0),
                Constraint::Length(1), // Controls
            ])
            .margin(1)
            .split(inner);

        let message = Paragraph::new(self.message.as_str()).style(Style::default().fg(theme.text));
        f.render_widget(message, chunks[0]);

        let input = Paragraph::new(format!("{}_", self.value))
            .style(Style::default().fg(theme.accent))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent)),
            );
        f.render_widget(input, chunks[1]);

        let controls = Paragraph::new(Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" confirm  "),
            Span::styled(
                "Esc",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" cancel"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(controls, chunks[3]);
    }
}
