//! CLI command handlers for LazyChecklist.
//!
//! This module provides headless, scriptable access to templates and
//! checklists for automation and testing.

pub mod checklist;
pub mod common;
pub mod template;

// Re-export types used by main.rs and tests
pub use checklist::ChecklistArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use template::TemplateArgs;
