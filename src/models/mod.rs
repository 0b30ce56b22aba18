//! Data models for checklist templates.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI, storage and business logic.

pub mod item;
pub mod template;

// Re-export all model types
pub use item::ChecklistItem;
pub use template::{
    is_template_value, parse_template_json, validate_template_name, Template,
    TemplateCollection,
};
