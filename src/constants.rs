//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and storage conventions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyChecklist";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "lazychecklist";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "LazyChecklist";

/// Default key prefix that marks a store entry as a template.
pub const DEFAULT_KEY_PREFIX: &str = "template:";

/// File name of the default on-disk key-value store.
pub const STORE_FILE_NAME: &str = "store.json";

/// File name of the TUI log file.
pub const LOG_FILE_NAME: &str = "lazychecklist.log";

/// Extension used for exported and imported template files.
pub const TEMPLATE_FILE_EXTENSION: &str = "json";
