//! Template editor: in-memory editing of one template's items.
//!
//! The editor owns an item buffer and a mode. It never caches templates
//! itself; every operation that reads or writes templates takes the shared
//! [`TemplateRepository`] as a parameter.
//!
//! Items in the buffer carry a stable [`ItemKey`] assigned when they enter
//! the buffer, so edit and delete address an item rather than a position.

pub mod error;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use error::{Action, EditorError};

use crate::models::{validate_template_name, ChecklistItem};
use crate::services::{export_template, read_template_file, TemplateRepository};
use crate::store::KeyValueStore;

/// Stable identity of an item inside the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

/// An item in the editor buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferItem {
    /// Buffer-local identity
    pub key: ItemKey,
    /// The item itself
    pub item: ChecklistItem,
}

/// What the editor buffer belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Viewing/editing an existing template, or nothing selected
    Browsing {
        /// Selected template name
        selected: Option<String>,
    },
    /// Editing a fresh, unnamed template
    Creating,
}

/// An item open for inline editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEdit {
    /// Item being edited
    pub key: ItemKey,
    /// Edit buffer, seeded with the item's text
    pub text: String,
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The buffer was written under this name
    Saved(String),
    /// A name is required; call [`TemplateEditor::save_as`]
    NeedsName,
    /// The name prompt was dismissed; nothing was written
    Cancelled,
}

/// Editor state for one template's item list.
#[derive(Debug, Clone)]
pub struct TemplateEditor {
    mode: EditorMode,
    items: Vec<BufferItem>,
    next_key: u64,
    input: String,
    editing: Option<ItemEdit>,
}

impl TemplateEditor {
    /// Creates an editor with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: EditorMode::Browsing { selected: None },
            items: Vec::new(),
            next_key: 0,
            input: String::new(),
            editing: None,
        }
    }

    // === Accessors ===

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Selected template name, if browsing one.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Browsing { selected } => selected.as_deref(),
            EditorMode::Creating => None,
        }
    }

    /// Whether a new template is being created.
    #[must_use]
    pub const fn is_creating(&self) -> bool {
        matches!(self.mode, EditorMode::Creating)
    }

    /// Buffer items in order.
    #[must_use]
    pub fn items(&self) -> &[BufferItem] {
        &self.items
    }

    /// Buffer contents as plain checklist items.
    #[must_use]
    pub fn checklist_items(&self) -> Vec<ChecklistItem> {
        self.items.iter().map(|entry| entry.item.clone()).collect()
    }

    /// New-item input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mutable new-item input text.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Replaces the new-item input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Item currently open for editing.
    #[must_use]
    pub const fn editing(&self) -> Option<&ItemEdit> {
        self.editing.as_ref()
    }

    /// Mutable edit buffer of the item being edited.
    pub fn edit_text_mut(&mut self) -> Option<&mut String> {
        self.editing.as_mut().map(|edit| &mut edit.text)
    }

    /// Key of the item at `index`.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<ItemKey> {
        self.items.get(index).map(|entry| entry.key)
    }

    /// Current position of an item.
    #[must_use]
    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.items.iter().position(|entry| entry.key == key)
    }

    // === Buffer operations ===

    fn issue_key(&mut self) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn load_buffer(&mut self, items: &[ChecklistItem]) {
        self.editing = None;
        self.items.clear();
        for item in items {
            let key = self.issue_key();
            self.items.push(BufferItem {
                key,
                item: item.clone(),
            });
        }
    }

    /// Loads a template's items into the buffer. The store is not touched.
    pub fn select_template<S: KeyValueStore>(
        &mut self,
        repository: &TemplateRepository<S>,
        name: &str,
    ) -> Result<(), EditorError> {
        let items = repository
            .get(name)
            .ok_or_else(|| EditorError::UnknownTemplate(name.to_string()))?
            .to_vec();

        self.load_buffer(&items);
        self.mode = EditorMode::Browsing {
            selected: Some(name.to_string()),
        };
        Ok(())
    }

    /// Clears the selection and the buffer.
    pub fn clear_selection(&mut self) {
        self.load_buffer(&[]);
        self.mode = EditorMode::Browsing { selected: None };
    }

    /// Starts a new, unnamed template with an empty buffer.
    pub fn new_template(&mut self) {
        self.load_buffer(&[]);
        self.mode = EditorMode::Creating;
    }

    /// Appends the trimmed input as a new item and clears the input.
    ///
    /// Blank input is ignored and left in place. Returns the new item's key.
    pub fn add_item(&mut self) -> Option<ItemKey> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }

        let item = ChecklistItem::new(text);
        let key = self.issue_key();
        self.items.push(BufferItem { key, item });
        self.input.clear();
        Some(key)
    }

    /// Opens an item for inline editing, seeding the edit buffer with its text.
    pub fn begin_edit(&mut self, key: ItemKey) -> bool {
        let Some(entry) = self.items.iter().find(|entry| entry.key == key) else {
            return false;
        };
        self.editing = Some(ItemEdit {
            key,
            text: entry.item.text.clone(),
        });
        true
    }

    /// Writes the edit buffer into the edited item and closes the edit.
    ///
    /// The text is stored as typed; an empty string is allowed.
    pub fn save_edit(&mut self) -> bool {
        let Some(edit) = self.editing.take() else {
            return false;
        };
        match self.items.iter_mut().find(|entry| entry.key == edit.key) {
            Some(entry) => {
                entry.item.text = edit.text;
                true
            }
            None => false,
        }
    }

    /// Closes the edit without changing the item.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Removes an item. Later items move up one position.
    pub fn delete_item(&mut self, key: ItemKey) -> Option<ChecklistItem> {
        let index = self.index_of(key)?;
        if self.editing.as_ref().is_some_and(|edit| edit.key == key) {
            self.editing = None;
        }
        Some(self.items.remove(index).item)
    }

    // === Template operations ===

    /// Saves the buffer.
    ///
    /// When creating, a name is needed first and [`SaveOutcome::NeedsName`]
    /// is returned. When browsing a selected template it is overwritten
    /// under its name. Otherwise nothing is written.
    pub fn save<S: KeyValueStore>(
        &mut self,
        repository: &mut TemplateRepository<S>,
    ) -> Result<SaveOutcome, EditorError> {
        match &self.mode {
            EditorMode::Creating => Ok(SaveOutcome::NeedsName),
            EditorMode::Browsing {
                selected: Some(name),
            } => {
                let name = name.clone();
                repository.save(&name, &self.checklist_items())?;
                Ok(SaveOutcome::Saved(name))
            }
            EditorMode::Browsing { selected: None } => {
                warn!("Save requested with no template selected");
                Err(EditorError::NoSelection(Action::Save))
            }
        }
    }

    /// Saves the buffer under a new name.
    ///
    /// `None` or a blank name means the prompt was dismissed. Names with path
    /// separators are rejected. On success the new name becomes the selection.
    pub fn save_as<S: KeyValueStore>(
        &mut self,
        repository: &mut TemplateRepository<S>,
        name: Option<&str>,
    ) -> Result<SaveOutcome, EditorError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(SaveOutcome::Cancelled);
        };
        validate_template_name(name).map_err(EditorError::InvalidName)?;

        repository.save(name, &self.checklist_items())?;
        self.mode = EditorMode::Browsing {
            selected: Some(name.to_string()),
        };
        Ok(SaveOutcome::Saved(name.to_string()))
    }

    /// Deletes the selected template from the store and the collection.
    pub fn delete_template<S: KeyValueStore>(
        &mut self,
        repository: &mut TemplateRepository<S>,
    ) -> Result<String, EditorError> {
        let Some(name) = self.selected().map(str::to_string) else {
            warn!("Delete requested with no template selected");
            return Err(EditorError::NoSelection(Action::Delete));
        };

        repository.delete(&name)?;
        self.clear_selection();
        Ok(name)
    }

    /// Imports a template file and selects it.
    ///
    /// The template is named after the file (final extension removed) and
    /// staged in the collection; it reaches the store only on the next save.
    /// A failed import changes nothing.
    pub fn import_file<S: KeyValueStore>(
        &mut self,
        repository: &mut TemplateRepository<S>,
        path: &Path,
    ) -> Result<String, EditorError> {
        let template = read_template_file(path).map_err(EditorError::Import)?;

        self.load_buffer(&template.items);
        repository.stage(&template.name, template.items);
        self.mode = EditorMode::Browsing {
            selected: Some(template.name.clone()),
        };
        info!("Imported template '{}' from {}", template.name, path.display());
        Ok(template.name)
    }

    /// Exports the selected template's collection entry to `<dir>/<name>.json`.
    pub fn export<S: KeyValueStore>(
        &self,
        repository: &TemplateRepository<S>,
        dir: &Path,
    ) -> Result<PathBuf, EditorError> {
        let Some(name) = self.selected() else {
            warn!("Export requested with no template selected");
            return Err(EditorError::NoSelection(Action::Export));
        };

        let items = repository
            .get(name)
            .ok_or_else(|| EditorError::UnknownTemplate(name.to_string()))?;

        Ok(export_template(dir, name, items)?)
    }
}

impl Default for TemplateEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn texts(editor: &TemplateEditor) -> Vec<String> {
        editor
            .items()
            .iter()
            .map(|entry| entry.item.text.clone())
            .collect()
    }

    fn editor_with(items: &[&str]) -> TemplateEditor {
        let mut editor = TemplateEditor::new();
        for text in items {
            editor.set_input(*text);
            editor.add_item();
        }
        editor
    }

    fn repository_with(
        templates: &[(&str, &str)],
    ) -> TemplateRepository<MemoryStore> {
        let store = MemoryStore::with_entries(
            templates
                .iter()
                .map(|(name, json)| (format!("template:{name}"), (*json).to_string())),
        );
        TemplateRepository::new(store).unwrap()
    }

    #[test]
    fn test_add_item_trims_and_clears_input() {
        let mut editor = TemplateEditor::new();
        editor.set_input("  Buy milk  ");
        assert!(editor.add_item().is_some());
        assert_eq!(texts(&editor), vec!["Buy milk"]);
        assert!(editor.input().is_empty());
    }

    #[test]
    fn test_add_blank_item_is_ignored() {
        let mut editor = editor_with(&["Eggs"]);
        editor.set_input("   \t ");
        assert!(editor.add_item().is_none());
        assert_eq!(texts(&editor), vec!["Eggs"]);
    }

    #[test]
    fn test_edit_replaces_only_target() {
        let mut editor = editor_with(&["a", "b", "c"]);
        let key = editor.key_at(1).unwrap();

        assert!(editor.begin_edit(key));
        assert_eq!(editor.editing().unwrap().text, "b");
        *editor.edit_text_mut().unwrap() = String::new();
        assert!(editor.save_edit());

        assert_eq!(texts(&editor), vec!["a", "", "c"]);
        assert!(editor.editing().is_none());
    }

    #[test]
    fn test_cancel_edit_keeps_item() {
        let mut editor = editor_with(&["a"]);
        let key = editor.key_at(0).unwrap();
        editor.begin_edit(key);
        editor.edit_text_mut().unwrap().push_str("zzz");
        editor.cancel_edit();
        assert_eq!(texts(&editor), vec!["a"]);
    }

    #[test]
    fn test_delete_item_shifts_later_items() {
        let mut editor = editor_with(&["a", "b", "c", "d"]);
        let key_c = editor.key_at(2).unwrap();
        let removed = editor.delete_item(editor.key_at(1).unwrap());

        assert_eq!(removed, Some(ChecklistItem::new("b")));
        assert_eq!(texts(&editor), vec!["a", "c", "d"]);
        assert_eq!(editor.index_of(key_c), Some(1));
    }

    #[test]
    fn test_keys_stay_stable_after_delete() {
        let mut editor = editor_with(&["a", "b", "c"]);
        let key_c = editor.key_at(2).unwrap();
        editor.begin_edit(key_c);
        editor.delete_item(editor.key_at(0).unwrap());

        *editor.edit_text_mut().unwrap() = "C".to_string();
        editor.save_edit();
        assert_eq!(texts(&editor), vec!["b", "C"]);
    }

    #[test]
    fn test_deleting_edited_item_closes_edit() {
        let mut editor = editor_with(&["a"]);
        let key = editor.key_at(0).unwrap();
        editor.begin_edit(key);
        editor.delete_item(key);
        assert!(editor.editing().is_none());
        assert!(!editor.save_edit());
    }

    #[test]
    fn test_save_without_selection_warns_and_writes_nothing() {
        let mut repository = repository_with(&[]);
        let mut editor = editor_with(&["a"]);

        let err = editor.save(&mut repository).unwrap_err();
        assert!(matches!(err, EditorError::NoSelection(Action::Save)));
        assert_eq!(repository.store().write_count(), 0);
    }

    #[test]
    fn test_save_in_new_template_mode_needs_name() {
        let mut repository = repository_with(&[]);
        let mut editor = TemplateEditor::new();
        editor.new_template();
        editor.set_input("Passport");
        editor.add_item();

        assert_eq!(editor.save(&mut repository).unwrap(), SaveOutcome::NeedsName);
        assert_eq!(
            editor.save_as(&mut repository, None).unwrap(),
            SaveOutcome::Cancelled
        );
        assert!(editor.is_creating());

        let outcome = editor.save_as(&mut repository, Some(" travel ")).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved("travel".to_string()));
        assert!(!editor.is_creating());
        assert_eq!(editor.selected(), Some("travel"));
        assert_eq!(
            repository.get("travel"),
            Some(&[ChecklistItem::new("Passport")][..])
        );
    }

    #[test]
    fn test_save_overwrites_selected_template() {
        let mut repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, "chores").unwrap();
        editor.set_input("Laundry");
        editor.add_item();

        editor.save(&mut repository).unwrap();
        assert_eq!(
            repository.load_all().unwrap().get("chores"),
            Some(&[ChecklistItem::new("Dishes"), ChecklistItem::new("Laundry")][..])
        );
    }

    #[test]
    fn test_select_does_not_touch_store() {
        let repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, "chores").unwrap();
        assert_eq!(texts(&editor), vec!["Dishes"]);
        assert_eq!(repository.store().write_count(), 0);

        assert!(matches!(
            editor.select_template(&repository, "missing"),
            Err(EditorError::UnknownTemplate(_))
        ));
        assert_eq!(editor.selected(), Some("chores"));
    }

    #[test]
    fn test_new_template_clears_selection() {
        let repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, "chores").unwrap();

        editor.new_template();
        assert!(editor.is_creating());
        assert_eq!(editor.selected(), None);
        assert!(editor.items().is_empty());
    }

    #[test]
    fn test_delete_template() {
        let mut repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();

        assert!(matches!(
            editor.delete_template(&mut repository),
            Err(EditorError::NoSelection(Action::Delete))
        ));

        editor.select_template(&repository, "chores").unwrap();
        assert_eq!(editor.delete_template(&mut repository).unwrap(), "chores");
        assert!(!repository.contains("chores"));
        assert!(repository.store().get("template:chores").unwrap().is_none());
        assert_eq!(editor.selected(), None);
        assert!(editor.items().is_empty());
    }

    #[test]
    fn test_import_stages_without_writing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("groceries.json");
        fs::write(&path, r#"[{"text":"Milk"}]"#).unwrap();

        let mut repository = repository_with(&[]);
        let mut editor = TemplateEditor::new();
        let name = editor.import_file(&mut repository, &path).unwrap();

        assert_eq!(name, "groceries");
        assert_eq!(editor.selected(), Some("groceries"));
        assert_eq!(texts(&editor), vec!["Milk"]);
        assert_eq!(
            repository.get("groceries"),
            Some(&[ChecklistItem::new("Milk")][..])
        );
        assert!(repository.is_staged("groceries"));
        assert_eq!(repository.store().write_count(), 0);

        editor.save(&mut repository).unwrap();
        assert!(!repository.is_staged("groceries"));
        assert!(repository.store().get("template:groceries").unwrap().is_some());
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "[{\"text\": ").unwrap();

        let mut repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, "chores").unwrap();

        let err = editor.import_file(&mut repository, &path).unwrap_err();
        assert!(matches!(err, EditorError::Import(_)));
        assert_eq!(editor.selected(), Some("chores"));
        assert_eq!(texts(&editor), vec!["Dishes"]);
        assert_eq!(repository.names(), vec!["chores"]);

        let missing = temp.path().join("missing.json");
        assert!(editor.import_file(&mut repository, &missing).is_err());
    }

    #[test]
    fn test_export_selected_template() {
        let temp = TempDir::new().unwrap();
        let repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();

        assert!(matches!(
            editor.export(&repository, temp.path()),
            Err(EditorError::NoSelection(Action::Export))
        ));

        editor.select_template(&repository, "chores").unwrap();
        let path = editor.export(&repository, temp.path()).unwrap();
        assert_eq!(path, temp.path().join("chores.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), r#"[{"text":"Dishes"}]"#);
    }

    #[test]
    fn test_export_reads_collection_not_buffer() {
        let temp = TempDir::new().unwrap();
        let repository = repository_with(&[("chores", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, "chores").unwrap();
        editor.set_input("Unsaved");
        editor.add_item();

        let path = editor.export(&repository, temp.path()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), r#"[{"text":"Dishes"}]"#);
    }

    #[test]
    fn test_save_as_rejects_path_like_names() {
        let mut repository = repository_with(&[]);
        let mut editor = TemplateEditor::new();
        editor.new_template();
        editor.set_input("Standup");
        editor.add_item();

        for name in ["work/daily", "../escaped"] {
            assert!(matches!(
                editor.save_as(&mut repository, Some(name)),
                Err(EditorError::InvalidName(_))
            ));
        }
        assert!(editor.is_creating());
        assert_eq!(repository.store().write_count(), 0);
        assert!(repository.names().is_empty());
    }

    #[test]
    fn test_export_never_leaves_export_directory() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("inner");
        // A hand-edited store can still hold an unsafe key
        let repository = repository_with(&[("../escaped", r#"[{"text":"Dishes"}]"#)]);
        let mut editor = TemplateEditor::new();
        editor.select_template(&repository, "../escaped").unwrap();

        assert!(editor.export(&repository, &out).is_err());
        assert!(!temp.path().join("escaped.json").exists());
    }
}
