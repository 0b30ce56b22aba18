//! Template file import and export.
//!
//! Exported files hold the bare JSON item array, so a file written by
//! [`export_template`] can be read back by [`read_template_file`]. The
//! template name travels in the file name (`<name>.json`).

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::TEMPLATE_FILE_EXTENSION;
use crate::models::{is_template_value, validate_template_name, ChecklistItem, Template};
use crate::store::file::atomic_write;

/// Derives a template name from a file path by dropping its final extension.
///
/// `groceries.json` becomes `groceries`, `trip.v2.json` becomes `trip.v2`.
/// A file without an extension keeps its whole name.
pub fn template_name_from_path(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Path has no usable file name: {}", path.display()))?;

    let name = match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[..index],
        _ => file_name,
    };

    if name.trim().is_empty() {
        bail!("Cannot derive a template name from '{file_name}'");
    }

    Ok(name.to_string())
}

/// File name used when exporting a template.
#[must_use]
pub fn export_file_name(name: &str) -> String {
    format!("{name}.{TEMPLATE_FILE_EXTENSION}")
}

/// Parses template items from file content.
pub fn parse_template_file(content: &str) -> Result<Vec<ChecklistItem>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("File does not contain valid JSON")?;

    if !is_template_value(&value) {
        bail!("Expected a JSON array of {{\"text\": ...}} objects");
    }

    serde_json::from_value(value).context("Failed to decode checklist items")
}

/// Reads a template file, returning the template named after the file.
///
/// Nothing is returned unless both the name and the content are valid.
pub fn read_template_file(path: &Path) -> Result<Template> {
    let name = template_name_from_path(path)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path.display()))?;

    let items = parse_template_file(&content)
        .with_context(|| format!("Invalid template file: {}", path.display()))?;

    Ok(Template::new(name, items))
}

/// Writes `<dir>/<name>.json` containing the JSON item array.
///
/// Names that would leave `dir` are rejected before anything is written.
pub fn export_template(dir: &Path, name: &str, items: &[ChecklistItem]) -> Result<PathBuf> {
    validate_template_name(name)?;

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    }

    let path = dir.join(export_file_name(name));
    let json = serde_json::to_string(items).context("Failed to serialize template")?;
    atomic_write(&path, &json)?;

    info!("Exported template '{}' to {}", name, path.display());
    Ok(path)
}
