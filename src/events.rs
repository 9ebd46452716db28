//! Run log for workflow stage transitions.
//!
//! When run logging is enabled, every stage the workflow reaches is appended
//! to `<log_dir>/<adw_id>/events.ndjson` (one JSON object per line):
//!
//! - `ts`: RFC3339 timestamp
//! - `stage`: the workflow stage reached
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `adw_id`: the run identifier
//! - `details`: freeform object with stage-specific details
//!
//! Per-phase prompts and captured output are written alongside by the
//! assistant invoker.

use crate::error::{AdwError, Result};
use crate::workflow::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
#[cfg(test)]
use std::path::Path;

/// File name of the event log inside a run directory.
pub const EVENTS_FILE: &str = "events.ndjson";

/// One stage transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the stage was reached.
    pub ts: DateTime<Utc>,

    /// The stage that was reached.
    pub stage: Stage,

    /// The actor running the workflow (e.g., `user@HOST`).
    pub actor: String,

    /// Run identifier.
    pub adw_id: String,

    /// Freeform details object with stage-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event for `stage`, timestamped now.
    pub fn new(stage: Stage, adw_id: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            stage,
            actor: get_actor_string(),
            adw_id: adw_id.into(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AdwError::Config(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append-only NDJSON event log for one run.
#[derive(Debug, Clone)]
pub struct EventLog {
    run_dir: PathBuf,
}

impl EventLog {
    pub fn new(run_dir: impl Into<PathBuf>) -> Self {
        Self {
            run_dir: run_dir.into(),
        }
    }

    /// Path of the NDJSON file.
    pub fn events_file(&self) -> PathBuf {
        self.run_dir.join(EVENTS_FILE)
    }

    /// Append an event as a single JSON line, creating the file if needed.
    pub fn append(&self, event: &Event) -> Result<()> {
        let json_line = event.to_ndjson_line()?;

        fs::create_dir_all(&self.run_dir).map_err(|e| {
            AdwError::io(
                format!(
                    "failed to create run log directory '{}'",
                    self.run_dir.display()
                ),
                e,
            )
        })?;

        let events_file = self.events_file();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&events_file)
            .map_err(|e| {
                AdwError::io(
                    format!("failed to open events file '{}'", events_file.display()),
                    e,
                )
            })?;

        writeln!(file, "{}", json_line).map_err(|e| {
            AdwError::io(
                format!("failed to write event to '{}'", events_file.display()),
                e,
            )
        })?;

        Ok(())
    }
}

/// Read all events from a log file.
#[cfg(test)]
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AdwError::io(format!("failed to read '{}'", path.display()), e))?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .map_err(|e| AdwError::Config(format!("invalid event line '{}': {}", line, e)))
        })
        .collect()
}
