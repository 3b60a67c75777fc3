//! API Module
//!
//! Tauri command surface for the form page.

pub mod commands;

pub use commands::*;
