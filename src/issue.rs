//! Issue record: a minimal stand-in for an issue-tracker entry.
//!
//! There is no tracker integration. The record is built from the task
//! description with a placeholder number and embedded into the plan prompt
//! as single-line JSON.

use crate::error::{AdwError, Result};
use serde::{Deserialize, Serialize};

/// Placeholder used where a tracker would supply a real identifier.
pub const PLACEHOLDER_ID: &str = "N-A";

/// Structured issue passed to the planning prompt.
///
/// Field order is significant: it is the order of the serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub title: String,
    pub body: String,
    pub number: String,
}

impl IssueRecord {
    /// Build an issue from a task description.
    ///
    /// `kind` is the plan template name; the body reads `"<Kind>: <description>"`
    /// with the kind capitalized, e.g. `"Chore: Add logging"`.
    pub fn from_task(description: &str, kind: &str, number: impl Into<String>) -> Self {
        Self {
            title: description.to_string(),
            body: format!("{}: {}", capitalize(kind), description),
            number: number.into(),
        }
    }

    /// Serialize to a single-line JSON object.
    ///
    /// Output is serde_json's compact form: no spaces after `:` or `,`, and
    /// non-ASCII text is kept as UTF-8 rather than `\u` escaped.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AdwError::Config(format!("failed to serialize issue record: {}", e)))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
