//! adw: plan-then-implement workflow runner for AI coding assistants.
//!
//! This is the main entry point for the `adw` CLI. It parses arguments,
//! runs the workflow, and maps errors to exit codes.

mod cli;
mod commands;
pub mod assistant;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod issue;
pub mod plan_path;
pub mod prompt;
pub mod workflow;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::AdwError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap routes help/version to stdout and usage errors to stderr.
            let _ = err.print();
            return ExitCode::from(cli::parse_error_exit_code(&err) as u8);
        }
    };

    match commands::dispatch(cli) {
        Ok(summary) => {
            println!(
                "Run {} reached stage {}; plan: {}",
                summary.adw_id,
                summary.stage,
                summary.plan_path.display()
            );
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            match err {
                // Usage goes to stdout, like `--help`.
                AdwError::UsageError(ref usage) => println!("{}", usage),
                _ => eprintln!("Error: {}", err),
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
