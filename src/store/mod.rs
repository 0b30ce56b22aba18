//! Key-value storage backends.
//!
//! Templates are persisted through the [`KeyValueStore`] trait, a flat
//! string-to-string store with per-key atomicity. Two backends are provided:
//! an in-memory map and a JSON file on disk.

pub mod file;
pub mod memory;

use anyhow::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A flat string key-value store.
///
/// Writes are last-write-wins. Implementations must treat `remove` of a
/// missing key as a no-op.
pub trait KeyValueStore {
    /// Lists every key currently in the store.
    fn keys(&self) -> Result<Vec<String>>;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from the store.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
