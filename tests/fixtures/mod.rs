//! Shared test fixtures for library flow and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use lazychecklist::models::ChecklistItem;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Serializes item texts as a template JSON array.
pub fn template_json(texts: &[&str]) -> String {
    let items: Vec<ChecklistItem> = texts.iter().map(|t| ChecklistItem::new(*t)).collect();
    serde_json::to_string(&items).unwrap()
}

/// Builds a list of items from texts.
pub fn items(texts: &[&str]) -> Vec<ChecklistItem> {
    texts.iter().map(|t| ChecklistItem::new(*t)).collect()
}

/// Creates a temp directory and the path of a (not yet existing) store file in it.
pub fn temp_store() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    (dir, path)
}

/// Writes a store file holding the given raw key/value pairs.
pub fn write_store(path: &Path, entries: &[(&str, &str)]) {
    let map: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), serde_json::Value::String((*v).to_string())))
        .collect();
    fs::write(path, serde_json::to_string_pretty(&map).unwrap()).unwrap();
}

/// Reads a store file back as a JSON object.
pub fn read_store(path: &Path) -> serde_json::Map<String, serde_json::Value> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Writes a template file with the given item texts.
pub fn write_template_file(dir: &Path, file_name: &str, texts: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, template_json(texts)).unwrap();
    path
}
