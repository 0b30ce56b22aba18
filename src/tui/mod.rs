//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event routing,
//! and the two top-level panes (template builder and checklist builder).

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod checklist_builder;
pub mod component;
pub mod handlers;
pub mod status_bar;
pub mod template_builder;
pub mod text_prompt;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, warn};

use crate::checklist::ChecklistView;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::editor::{EditorError, TemplateEditor};
use crate::services::TemplateRepository;
use crate::store::KeyValueStore;

pub use checklist_builder::{ChecklistFocus, ChecklistUiState};
pub use component::{Component, ComponentEvent};
pub use status_bar::StatusBar;
pub use template_builder::{BuilderFocus, BuilderUiState};
pub use text_prompt::TextPrompt;
pub use theme::Theme;

/// Repository type used by the TUI.
pub type AppRepository = TemplateRepository<Box<dyn KeyValueStore>>;

/// Top-level mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Author and manage templates
    TemplateBuilder,
    /// Fill in a checklist built from a template
    ChecklistBuilder,
}

impl AppMode {
    /// Tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TemplateBuilder => "1 Create Template",
            Self::ChecklistBuilder => "2 Create Checklist",
        }
    }
}

/// Active popup component.
///
/// Only one popup can be open at a time; it receives all input.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Asks for a template name before saving
    SaveAsPrompt(TextPrompt),
    /// Asks for the path of a template file to import
    ImportPrompt(TextPrompt),
}

/// Application state - single source of truth
///
/// Rendering reads this state immutably; only handlers modify it.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Shared template repository
    pub repository: AppRepository,
    /// Template editor buffer and mode
    pub editor: TemplateEditor,
    /// Checklist instance state
    pub checklist: ChecklistView,
    /// Current top-level mode
    pub mode: AppMode,
    /// Cursor and focus state of the template builder
    pub builder: BuilderUiState,
    /// Cursor and focus state of the checklist builder
    pub checklist_ui: ChecklistUiState,
    /// Current UI theme
    pub theme: Theme,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for status message (warnings rendered via status)
    pub status_color_override: Option<Color>,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Currently open popup (if any)
    pub active_component: Option<ActiveComponent>,
    /// Directory exported templates are written to
    pub export_dir: PathBuf,
}

impl AppState {
    /// Creates the application state over a repository.
    #[must_use]
    pub fn new(config: Config, repository: AppRepository) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let export_dir = config.export.export_dir();
        Self {
            config,
            repository,
            editor: TemplateEditor::new(),
            checklist: ChecklistView::new(),
            mode: AppMode::TemplateBuilder,
            builder: BuilderUiState::default(),
            checklist_ui: ChecklistUiState::default(),
            theme,
            status_message: "Tab: switch pane | 1/2: switch mode | q: quit".to_string(),
            status_color_override: None,
            error_message: None,
            active_component: None,
            export_dir,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message shown in the success color
    pub fn set_success(&mut self, message: impl Into<String>) {
        let color = self.theme.success;
        self.set_status_with_style(message, color);
    }

    /// Set status message shown in the warning color
    pub fn set_warning(&mut self, message: impl Into<String>) {
        let color = self.theme.warning;
        self.set_status_with_style(message, color);
    }

    /// Set status message with custom foreground color
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Reports a failed editor operation: warnings go to the status bar,
    /// failures to the error overlay.
    pub fn report(&mut self, err: &EditorError) {
        if err.is_warning() {
            warn!("{}", err);
            self.set_warning(err.to_string());
        } else {
            error!("{:#}", err);
            self.set_error(format!("{err:#}"));
        }
    }

    /// Switch the top-level mode.
    ///
    /// Both panes read the shared repository, so nothing needs reloading. A
    /// checklist whose template was deleted in the meantime is dropped.
    pub fn switch_mode(&mut self, mode: AppMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        let stale = self
            .checklist
            .selected()
            .is_some_and(|name| !self.repository.contains(name));
        if stale {
            self.checklist.select_template(None);
            self.checklist_ui.focus = ChecklistFocus::Templates;
            self.checklist_ui.row_cursor = 0;
            self.checklist_ui.filling = None;
        }
        self.checklist_ui.clamp(self.repository.names().len());
        self.builder.clamp_templates(self.repository.names().len());
    }

    /// Open the Save As name prompt
    pub fn open_save_as_prompt(&mut self) {
        let initial = self.editor.selected().unwrap_or_default().to_string();
        let prompt = TextPrompt::new("Save As", "Enter a name for your template:", initial);
        self.active_component = Some(ActiveComponent::SaveAsPrompt(prompt));
    }

    /// Open the import path prompt
    pub fn open_import_prompt(&mut self) {
        let prompt = TextPrompt::new("Import Template", "Path to a .json template file:", "");
        self.active_component = Some(ActiveComponent::ImportPrompt(prompt));
    }

    /// Close the currently open popup
    pub fn close_component(&mut self) {
        self.active_component = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode tabs
            Constraint::Min(8),    // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match state.mode {
        AppMode::TemplateBuilder => template_builder::render(f, chunks[1], state),
        AppMode::ChecklistBuilder => checklist_builder::render(f, chunks[1], state),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);

    match &state.active_component {
        Some(ActiveComponent::SaveAsPrompt(prompt) | ActiveComponent::ImportPrompt(prompt)) => {
            prompt.render(f, f.area(), &state.theme);
        }
        None => {}
    }

    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render the mode tabs
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let modes = [AppMode::TemplateBuilder, AppMode::ChecklistBuilder];
    let selected = modes.iter().position(|m| *m == state.mode).unwrap_or(0);

    let tabs = Tabs::new(modes.iter().map(|m| m.title()).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().fg(state.theme.text))
        .highlight_style(
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {APP_NAME} "))
                .border_style(Style::default().fg(state.theme.primary)),
        );
    f.render_widget(tabs, area);
}

/// Render the blocking error overlay
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
///
/// Returns `true` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // The error overlay blocks all other input until dismissed
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.active_component.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    match state.mode {
        AppMode::TemplateBuilder => handlers::handle_template_builder_input(state, key),
        AppMode::ChecklistBuilder => handlers::handle_checklist_builder_input(state, key),
    }
}
