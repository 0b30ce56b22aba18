//! Checklist view: a fillable instance of one template.
//!
//! The view copies a template's items into rows and tracks each row's
//! checkbox and blank-field contents itself. None of this state flows back
//! into the template; [`ChecklistView::reset`] clears the checkboxes only.

pub mod segments;

use std::fmt::Write as _;

pub use segments::{split_segments, Segment};

use crate::models::{ChecklistItem, TemplateCollection};

/// Placeholder shown for an unfilled blank in plain-text rendering.
const EMPTY_BLANK: &str = "______";

/// Names of the templates available for a checklist.
#[must_use]
pub fn list_template_names(collection: &TemplateCollection) -> Vec<String> {
    collection.names()
}

/// One rendered checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    /// Segments of the item text
    pub segments: Vec<Segment>,
    /// Checkbox state
    pub checked: bool,
    /// Contents of each blank, in segment order
    pub blanks: Vec<String>,
}

impl ChecklistRow {
    /// Builds an unchecked row with empty blanks.
    #[must_use]
    pub fn from_item(item: &ChecklistItem) -> Self {
        let segments = split_segments(&item.text);
        let blanks = vec![String::new(); segments.iter().filter(|s| s.is_blank()).count()];
        Self {
            segments,
            checked: false,
            blanks,
        }
    }

    /// Renders the row as a single line of text.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut line = String::from(if self.checked { "[x]" } else { "[ ]" });
        let mut blank_index = 0;
        for segment in &self.segments {
            line.push(' ');
            match segment {
                Segment::Text(text) => line.push_str(text),
                Segment::Blank => {
                    let value = self.blanks.get(blank_index).map_or("", String::as_str);
                    line.push_str(if value.is_empty() { EMPTY_BLANK } else { value });
                    blank_index += 1;
                }
            }
        }
        line
    }
}

/// Checklist selection, visibility and per-row state.
#[derive(Debug, Clone, Default)]
pub struct ChecklistView {
    selected: Option<String>,
    visible: bool,
    rows: Vec<ChecklistRow>,
}

impl ChecklistView {
    /// Creates a view with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selection and hides any built checklist.
    pub fn select_template(&mut self, name: Option<&str>) {
        self.selected = name.map(str::to_string);
        self.visible = false;
        self.rows.clear();
    }

    /// Selected template name.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the checklist is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Builds rows for the selected template and shows the checklist.
    ///
    /// Returns `false` (and stays hidden) when nothing is selected or the
    /// template is no longer in the collection.
    pub fn build_checklist(&mut self, collection: &TemplateCollection) -> bool {
        let Some(items) = self.selected.as_deref().and_then(|name| collection.get(name)) else {
            self.visible = false;
            self.rows.clear();
            return false;
        };

        self.rows = items.iter().map(ChecklistRow::from_item).collect();
        self.visible = true;
        true
    }

    /// Rendered rows.
    #[must_use]
    pub fn rows(&self) -> &[ChecklistRow] {
        &self.rows
    }

    /// Flips a row's checkbox, returning the new state.
    pub fn toggle(&mut self, row: usize) -> Option<bool> {
        let row = self.rows.get_mut(row)?;
        row.checked = !row.checked;
        Some(row.checked)
    }

    /// Sets a row's checkbox.
    pub fn set_checked(&mut self, row: usize, checked: bool) -> bool {
        match self.rows.get_mut(row) {
            Some(row) => {
                row.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Mutable contents of blank `blank` in row `row`.
    pub fn blank_mut(&mut self, row: usize, blank: usize) -> Option<&mut String> {
        self.rows.get_mut(row)?.blanks.get_mut(blank)
    }

    /// Replaces the contents of a blank.
    pub fn set_blank(&mut self, row: usize, blank: usize, value: impl Into<String>) -> bool {
        match self.blank_mut(row, blank) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Unchecks every row. Blank contents are kept.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.checked = false;
        }
    }

    /// Number of checked rows.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|row| row.checked).count()
    }

    /// Renders the visible checklist as text, one row per line.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut output = String::new();
        if !self.visible {
            return output;
        }
        if let Some(name) = &self.selected {
            let _ = writeln!(output, "Checklist: {name}");
        }
        for row in &self.rows {
            let _ = writeln!(output, "{}", row.to_plain());
        }
        output
    }
}
