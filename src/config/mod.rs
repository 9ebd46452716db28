//! Configuration model for adw.
//!
//! This module defines the Config struct that represents `.adw/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//! The file itself is optional: a project without one runs on defaults.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{AssistantProfile, Config};
