//! LazyChecklist Library
//!
//! This library provides the core of the LazyChecklist application:
//! template storage over a key-value store, the template editor, checklist
//! rendering, and the TUI and CLI surfaces built on top of them.

// Module declarations
pub mod checklist;
pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;
