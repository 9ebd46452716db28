//! Exit code constants for the adw CLI.
//!
//! - 0: Success
//! - 1: Any fatal condition (usage, missing template, failed assistant,
//!   unparseable output, missing plan file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Fatal error. Every failure in the workflow terminates with this code.
pub const FAILURE: i32 = 1;
