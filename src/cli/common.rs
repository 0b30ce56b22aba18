//! Shared CLI plumbing: error type, exit codes and repository access.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Config;
use crate::editor::EditorError;
use crate::services::TemplateRepository;
use crate::store::FileStore;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input: unknown template, missing selection, invalid file
    Validation = 1,
    /// Store, config or file system failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Input validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or storage failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl From<EditorError> for CliError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::Store(inner) => Self::io(format!("{inner:#}")),
            other => Self::validation(other.to_string()),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// Store file from `--store`, overriding the config
    pub store_override: Option<PathBuf>,
}

impl CliContext {
    /// Creates a context from loaded config and an optional store override.
    #[must_use]
    pub const fn new(config: Config, store_override: Option<PathBuf>) -> Self {
        Self {
            config,
            store_override,
        }
    }

    /// Resolves the store file path.
    pub fn store_path(&self) -> CliResult<PathBuf> {
        match &self.store_override {
            Some(path) => Ok(path.clone()),
            None => self
                .config
                .storage
                .store_path()
                .map_err(|e| CliError::io(format!("Failed to resolve store path: {e}"))),
        }
    }

    /// Opens the template repository over the configured file store.
    pub fn open_repository(&self) -> CliResult<TemplateRepository<FileStore>> {
        let store = FileStore::open(self.store_path()?);
        TemplateRepository::with_prefix(store, self.config.storage.key_prefix.clone())
            .map_err(|e| CliError::io(format!("Failed to load templates: {e:#}")))
    }
}
