//! Plan path discovery in assistant output.
//!
//! The assistant answers in free-form text and names the plan file it wrote
//! somewhere near the end, usually on the last line. Lines are therefore
//! scanned from the end. This is a heuristic over prose, not a parser: a
//! change in the assistant's phrasing can produce false positives or misses.

use crate::error::{AdwError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Find the plan path in `output`, scanning lines from last to first.
///
/// Each line is trimmed and stripped of surrounding backticks. A line that
/// ends with `extension` is returned whole; otherwise the first path-like
/// token (word characters, `-`, `/`, `.`) ending in `extension` is returned.
pub fn extract_plan_path(output: &str, extension: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"([\w\-/.]+{})", regex::escape(extension)))
        .expect("escaped extension always forms a valid regex");

    for line in output.trim().split('\n').rev() {
        let line = line.trim().trim_matches('`');
        if line.is_empty() || !line.contains(extension) {
            continue;
        }

        if line.ends_with(extension) {
            return Some(line.to_string());
        }

        if let Some(caps) = pattern.captures(line) {
            return Some(caps[1].to_string());
        }
    }

    None
}

/// Resolve a discovered plan path against the project root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_plan_path(project_root: &Path, plan_path: &str) -> PathBuf {
    project_root.join(plan_path)
}

/// Read the plan file's full text.
///
/// The path must carry the plan extension and name a readable file.
pub fn read_plan(path: &Path, extension: &str) -> Result<String> {
    let has_extension = path
        .to_str()
        .is_some_and(|p| p.ends_with(extension));
    if !has_extension || !path.is_file() {
        return Err(AdwError::PlanFileMissing {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|_| AdwError::PlanFileMissing {
        path: path.to_path_buf(),
    })
}
