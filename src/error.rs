//! Error types for the adw CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every failure is fatal: nothing here is retried or recovered.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for adw operations.
#[derive(Error, Debug)]
pub enum AdwError {
    /// No task description was supplied.
    #[error("{0}")]
    UsageError(String),

    /// A required command template is missing.
    #[error("Template not found: {}", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    /// The template references placeholder tokens that were not supplied.
    #[error("template '{template}' has unresolved placeholders: {}", .tokens.join(", "))]
    UnresolvedPlaceholder {
        template: String,
        tokens: Vec<String>,
    },

    /// The assistant program could not be started at all.
    #[error("failed to execute assistant '{program}': {source}\nFix: ensure the command is installed and in PATH.")]
    AssistantLaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The assistant ran but exited unsuccessfully.
    #[error("assistant failed during {phase} phase ({status})\n{stderr}")]
    AssistantInvocationFailed {
        phase: String,
        status: String,
        stderr: String,
    },

    /// No plausible plan path was found in the assistant output.
    #[error("Could not find plan path in output")]
    PathExtractionFailed,

    /// The extracted plan path does not name a readable plan file.
    #[error("Plan file not found or unreadable: {}", .path.display())]
    PlanFileMissing { path: PathBuf },

    /// Invalid or unreadable configuration.
    #[error("{0}")]
    Config(String),

    /// Any other filesystem failure.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl AdwError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AdwError::UsageError(_)
            | AdwError::TemplateNotFound { .. }
            | AdwError::UnresolvedPlaceholder { .. }
            | AdwError::AssistantLaunchFailed { .. }
            | AdwError::AssistantInvocationFailed { .. }
            | AdwError::PathExtractionFailed
            | AdwError::PlanFileMissing { .. }
            | AdwError::Config(_)
            | AdwError::Io { .. } => exit_codes::FAILURE,
        }
    }

    /// Wrap an I/O error with a human-readable context line.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AdwError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for adw operations.
pub type Result<T> = std::result::Result<T, AdwError>;
