//! Templates and the name-keyed template collection.

use anyhow::{bail, Result};
use serde_json::Value;
use std::collections::BTreeMap;

use super::ChecklistItem;

/// A named, ordered list of checklist items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template name (also its identity)
    pub name: String,
    /// Items in display order
    pub items: Vec<ChecklistItem>,
}

impl Template {
    /// Creates a template from a name and its items.
    pub fn new(name: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Mapping from template name to its items, ordered by name.
///
/// This is a derived cache; the key-value store stays authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCollection {
    templates: BTreeMap<String, Vec<ChecklistItem>>,
}

impl TemplateCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items of a template.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ChecklistItem]> {
        self.templates.get(name).map(Vec::as_slice)
    }

    /// Inserts or replaces a template, returning the previous items.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        items: Vec<ChecklistItem>,
    ) -> Option<Vec<ChecklistItem>> {
        self.templates.insert(name.into(), items)
    }

    /// Removes a template, returning its items if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Vec<ChecklistItem>> {
        self.templates.remove(name)
    }

    /// Whether a template with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates over `(name, items)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ChecklistItem>)> {
        self.templates.iter()
    }
}

impl FromIterator<(String, Vec<ChecklistItem>)> for TemplateCollection {
    fn from_iter<I: IntoIterator<Item = (String, Vec<ChecklistItem>)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

/// Checks whether a JSON value has template shape.
///
/// A template is an array where every element is an object carrying a
/// string `text` field. An empty array qualifies.
#[must_use]
pub fn is_template_value(value: &Value) -> bool {
    match value {
        Value::Array(elements) => elements
            .iter()
            .all(|element| matches!(element.get("text"), Some(Value::String(_)))),
        _ => false,
    }
}

/// Checks that a name can serve both as a store key and as an export file stem.
///
/// Names must be non-blank and must not contain path separators or be a
/// relative path component (`.` or `..`).
pub fn validate_template_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Template name cannot be empty");
    }
    if name.contains(['/', '\\']) {
        bail!("Template name '{name}' must not contain '/' or '\\'");
    }
    if name == "." || name == ".." {
        bail!("Template name '{name}' is not allowed");
    }
    Ok(())
}

/// Parses raw JSON into template items.
///
/// Returns `None` for malformed JSON and for values without template shape.
#[must_use]
pub fn parse_template_json(raw: &str) -> Option<Vec<ChecklistItem>> {
    let value: Value = serde_json::from_str(raw).ok()?;
    if !is_template_value(&value) {
        return None;
    }
    serde_json::from_value(value).ok()
}
