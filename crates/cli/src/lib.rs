//! Command-line presentation for the inventory engine.

pub mod commands;
pub mod format;
