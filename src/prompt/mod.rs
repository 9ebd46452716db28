//! Prompt construction for assistant invocations.
//!
//! This module provides:
//!
//! - **Template**: loading command templates from the project's commands directory
//! - **Placeholders**: explicit token-to-value substitution into a template
//!
//! # Template Syntax
//!
//! Templates are plain markdown using positional tokens:
//!
//! ```text
//! # Chore Planning
//!
//! issue_number: $1
//! adw_id: $2
//! issue_json: $3
//! ```
//!
//! and `$ARGUMENTS` for free-form content such as a plan body.

mod placeholders;
mod template;

pub use placeholders::Placeholders;
pub use template::{load_template, template_path};
