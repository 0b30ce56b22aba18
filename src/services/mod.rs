//! Service layer for template persistence.
//!
//! This module contains the template repository shared by the editor and
//! the checklist view, plus template file import/export helpers.

pub mod templates;
pub mod transfer;

// Re-export commonly used types and functions
pub use templates::TemplateRepository;
pub use transfer::{export_file_name, export_template, read_template_file, template_name_from_path};
