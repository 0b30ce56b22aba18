//! A single checklist template entry.

use serde::{Deserialize, Serialize};

/// One item of a checklist template.
///
/// The text may embed blank separators (see [`crate::checklist::segments`]);
/// position in the owning list is the only ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item text, possibly containing blank separators
    pub text: String,
}

impl ChecklistItem {
    /// Creates an item from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for ChecklistItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
