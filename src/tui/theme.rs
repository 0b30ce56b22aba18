//! Color themes for dark and light terminals.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors used by every pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Focused pane and cursor highlight
    pub accent: Color,
    /// Success messages and checked boxes
    pub success: Color,
    /// Error overlay
    pub error: Color,
    /// Warnings and unsaved markers
    pub warning: Color,
    /// Body text
    pub text: Color,
    /// Hints and placeholders
    pub text_muted: Color,
    /// Screen background
    pub background: Color,
    /// Background of filled-in blanks
    pub field_bg: Color,
}

impl Theme {
    /// Detects the OS theme with `dark-light`, falling back to dark.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            field_bg: Color::Rgb(40, 40, 40),
        }
    }

    /// Theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            field_bg: Color::Rgb(230, 230, 230),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
