//! Template repository over a key-value store.
//!
//! The repository is the single owner of the template cache. It scans the
//! store for keys under its namespace prefix, keeps only values with
//! template shape, and mirrors every write into the cache so callers never
//! hold a stale copy.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::constants::DEFAULT_KEY_PREFIX;
use crate::models::{parse_template_json, validate_template_name, ChecklistItem, TemplateCollection};
use crate::store::KeyValueStore;

/// Shared template repository.
///
/// Besides persisted templates, the cache may hold *staged* templates:
/// entries installed in memory (e.g. by an import) that have not been
/// written to the store yet. Staged entries survive [`reload`](Self::reload)
/// and are cleared by [`save`](Self::save) or [`delete`](Self::delete).
#[derive(Debug)]
pub struct TemplateRepository<S: KeyValueStore> {
    store: S,
    prefix: String,
    cache: TemplateCollection,
    staged: BTreeSet<String>,
}

impl<S: KeyValueStore> TemplateRepository<S> {
    /// Creates a repository with the default `template:` key prefix and
    /// loads the cache.
    pub fn new(store: S) -> Result<Self> {
        Self::with_prefix(store, DEFAULT_KEY_PREFIX)
    }

    /// Creates a repository with a custom key prefix and loads the cache.
    ///
    /// An empty prefix makes every store key a template candidate, so
    /// membership is decided by value shape alone.
    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Result<Self> {
        let mut repository = Self {
            store,
            prefix: prefix.into(),
            cache: TemplateCollection::new(),
            staged: BTreeSet::new(),
        };
        repository.reload()?;
        Ok(repository)
    }

    /// Key namespace prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Store key for a template name.
    #[must_use]
    pub fn key_for(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Scans the store and returns every persisted template.
    ///
    /// Values that fail to parse or lack template shape are skipped
    /// without error.
    pub fn load_all(&self) -> Result<TemplateCollection> {
        let mut collection = TemplateCollection::new();

        for key in self.store.keys().context("Failed to list store keys")? {
            let Some(name) = key.strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let Some(raw) = self.store.get(&key)? else {
                continue;
            };

            match parse_template_json(&raw) {
                Some(items) => {
                    collection.insert(name, items);
                }
                None => debug!("Skipping store key '{}': not a template", key),
            }
        }

        Ok(collection)
    }

    /// Rebuilds the cache from the store, keeping staged templates.
    pub fn reload(&mut self) -> Result<()> {
        let mut collection = self.load_all()?;
        for name in &self.staged {
            if let Some(items) = self.cache.get(name) {
                collection.insert(name.clone(), items.to_vec());
            }
        }
        debug!("Loaded {} templates", collection.len());
        self.cache = collection;
        Ok(())
    }

    /// Current template collection (persisted and staged).
    #[must_use]
    pub const fn collection(&self) -> &TemplateCollection {
        &self.cache
    }

    /// Items of a template.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ChecklistItem]> {
        self.cache.get(name)
    }

    /// Whether a template is known.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cache.contains(name)
    }

    /// Sorted template names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.cache.names()
    }

    /// Persists a template, overwriting any previous value.
    pub fn save(&mut self, name: &str, items: &[ChecklistItem]) -> Result<()> {
        validate_template_name(name)?;

        let json = serde_json::to_string(items).context("Failed to serialize template")?;
        let key = self.key_for(name);
        self.store
            .set(&key, &json)
            .with_context(|| format!("Failed to write template '{name}'"))?;

        self.cache.insert(name, items.to_vec());
        self.staged.remove(name);
        info!("Saved template '{}' ({} items)", name, items.len());
        Ok(())
    }

    /// Removes a template from the store and the cache. Missing names are a no-op.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let key = self.key_for(name);
        self.store
            .remove(&key)
            .with_context(|| format!("Failed to delete template '{name}'"))?;

        self.cache.remove(name);
        self.staged.remove(name);
        info!("Deleted template '{}'", name);
        Ok(())
    }

    /// Installs a template in the cache without writing it to the store.
    pub fn stage(&mut self, name: &str, items: Vec<ChecklistItem>) {
        self.cache.insert(name, items);
        self.staged.insert(name.to_string());
        debug!("Staged template '{}'", name);
    }

    /// Whether a template exists only in memory.
    #[must_use]
    pub fn is_staged(&self, name: &str) -> bool {
        self.staged.contains(name)
    }

    /// Names of templates that exist only in memory.
    #[must_use]
    pub fn staged_names(&self) -> Vec<String> {
        self.staged.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn items(texts: &[&str]) -> Vec<ChecklistItem> {
        texts.iter().map(|t| ChecklistItem::new(*t)).collect()
    }

    #[test]
    fn test_load_all_filters_by_shape() {
        let store = MemoryStore::with_entries([
            ("template:groceries", r#"[{"text":"Milk"}]"#),
            ("template:empty", "[]"),
            ("template:object", r#"{"text":"Milk"}"#),
            ("template:missing_text", r#"[{"label":"Milk"}]"#),
            ("template:garbage", "{not json"),
        ]);
        let repository = TemplateRepository::new(store).unwrap();

        assert_eq!(repository.names(), vec!["empty", "groceries"]);
        assert_eq!(repository.get("groceries"), Some(&items(&["Milk"])[..]));
    }

    #[test]
    fn test_load_all_ignores_keys_outside_namespace() {
        let store = MemoryStore::with_entries([
            ("template:chores", r#"[{"text":"Dishes"}]"#),
            ("theme", r#"[{"text":"looks like a template"}]"#),
        ]);
        let repository = TemplateRepository::new(store).unwrap();
        assert_eq!(repository.names(), vec!["chores"]);
    }

    #[test]
    fn test_empty_prefix_scans_every_key() {
        let store = MemoryStore::with_entries([
            ("chores", r#"[{"text":"Dishes"}]"#),
            ("settings", r#"{"dark":true}"#),
        ]);
        let repository = TemplateRepository::with_prefix(store, "").unwrap();
        assert_eq!(repository.names(), vec!["chores"]);
    }

    #[test]
    fn test_save_round_trip() {
        let mut repository = TemplateRepository::new(MemoryStore::new()).unwrap();
        let list = items(&["Passport", "Tickets\\t"]);

        repository.save("travel", &list).unwrap();
        assert_eq!(
            repository.store().get("template:travel").unwrap().as_deref(),
            Some(r#"[{"text":"Passport"},{"text":"Tickets\\t"}]"#)
        );

        let reloaded = repository.load_all().unwrap();
        assert_eq!(reloaded.get("travel"), Some(&list[..]));
    }

    #[test]
    fn test_save_rejects_invalid_names() {
        let mut repository = TemplateRepository::new(MemoryStore::new()).unwrap();
        assert!(repository.save("", &[]).is_err());
        assert!(repository.save("work/daily", &items(&["x"])).is_err());
        assert!(repository.save("../escaped", &items(&["x"])).is_err());
        assert_eq!(repository.store().write_count(), 0);
        assert!(repository.names().is_empty());
    }

    #[test]
    fn test_delete_is_noop_when_absent() {
        let mut repository = TemplateRepository::new(MemoryStore::new()).unwrap();
        repository.delete("nothing").unwrap();

        repository.save("a", &items(&["x"])).unwrap();
        repository.delete("a").unwrap();
        assert!(!repository.contains("a"));
        assert!(repository.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_staged_templates_survive_reload_until_saved() {
        let mut repository = TemplateRepository::new(MemoryStore::new()).unwrap();
        repository.stage("imported", items(&["Milk"]));

        repository.reload().unwrap();
        assert!(repository.contains("imported"));
        assert!(repository.is_staged("imported"));
        assert_eq!(repository.store().write_count(), 0);

        repository.save("imported", &items(&["Milk"])).unwrap();
        assert!(!repository.is_staged("imported"));
        assert!(repository.staged_names().is_empty());
    }
}
