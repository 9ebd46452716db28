//! CLI argument parsing for adw.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use crate::exit_codes;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// adw: plan-then-implement workflow runner for AI coding assistants.
///
/// Runs the assistant once to write a plan for the task, then again to
/// implement that plan:
/// - the plan prompt is built from `<commands_dir>/<template>.md`
/// - the implement prompt is built from `<commands_dir>/implement.md`
#[derive(Parser, Debug)]
#[command(name = "adw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Free-text description of the task to plan and implement.
    pub description: Option<String>,

    /// Project root; the assistant runs here and templates are resolved from here.
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Config file (default: `<project-root>/.adw/config.yaml`, if present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Template used for the planning phase (e.g. chore, bug, feature).
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Assistant command, overriding `assistant.command` from config.
    #[arg(long, value_name = "CMD")]
    pub assistant: Option<String>,

    /// Run identifier (default: current UTC timestamp).
    #[arg(long)]
    pub adw_id: Option<String>,

    /// Issue number passed to the plan template.
    #[arg(long, default_value = crate::issue::PLACEHOLDER_ID)]
    pub issue_number: String,

    /// Write prompts, assistant output and stage events under this directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not echo assistant output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments without exiting on error.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Exit code for a parse error: help and version succeed, anything else fails.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.exit_code() == exit_codes::SUCCESS {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}

/// Usage text printed when no task description is given.
pub fn usage_text() -> String {
    format!(
        "{}\nExample: adw 'Add logging to readTasks'",
        Cli::command().render_usage()
    )
}
