//! Errors reported by template editor operations.

use std::fmt;
use thiserror::Error;

/// Editor operation that needs a selected template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Save the buffer under the selected name
    Save,
    /// Delete the selected template
    Delete,
    /// Export the selected template to a file
    Export,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Save => "save",
            Self::Delete => "delete",
            Self::Export => "export",
        };
        f.write_str(verb)
    }
}

/// Failure of a template editor operation.
///
/// Every failing operation leaves the editor and the repository as they
/// were before the call.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The operation needs a selected template and none is selected
    #[error("Please select a template to {0}!")]
    NoSelection(Action),

    /// The named template is not in the collection
    #[error("Template '{0}' not found")]
    UnknownTemplate(String),

    /// The name cannot be used as a template name
    #[error("Invalid template name: {0:#}")]
    InvalidName(anyhow::Error),

    /// The import file could not be read or parsed
    #[error("Invalid file format or file contents: {0:#}")]
    Import(anyhow::Error),

    /// The key-value store or file system failed
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl EditorError {
    /// Whether this is a user-level warning rather than a failure.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::NoSelection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_messages() {
        assert_eq!(
            EditorError::NoSelection(Action::Save).to_string(),
            "Please select a template to save!"
        );
        assert_eq!(
            EditorError::NoSelection(Action::Export).to_string(),
            "Please select a template to export!"
        );
        assert!(EditorError::NoSelection(Action::Delete).is_warning());
        assert!(!EditorError::UnknownTemplate("x".into()).is_warning());
        assert!(!EditorError::InvalidName(anyhow::anyhow!("bad")).is_warning());
    }
}
