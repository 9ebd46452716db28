//! Assistant subprocess invoker.
//!
//! Runs the assistant synchronously, captures stdout/stderr, and turns a
//! non-zero exit into a fatal error. There is no timeout: an unresponsive
//! assistant blocks the workflow until it exits.

use crate::config::AssistantProfile;
use crate::error::{AdwError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

/// Workflow phase an invocation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Produce the plan file.
    Plan,
    /// Apply the plan.
    Implement,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Plan => write!(f, "plan"),
            Phase::Implement => write!(f, "implement"),
        }
    }
}

/// Captured result of a successful assistant run.
#[derive(Debug, Clone)]
pub struct AssistantOutput {
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// Invokes the configured assistant from the project root.
#[derive(Debug, Clone)]
pub struct AssistantInvoker {
    profile: AssistantProfile,
    project_root: PathBuf,
    echo: bool,
    log_dir: Option<PathBuf>,
}

impl AssistantInvoker {
    pub fn new(profile: AssistantProfile, project_root: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            project_root: project_root.into(),
            echo: true,
            log_dir: None,
        }
    }

    /// Whether captured stdout is printed to the terminal.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Directory under which per-phase prompt and output files are written.
    pub fn log_dir(mut self, log_dir: Option<PathBuf>) -> Self {
        self.log_dir = log_dir;
        self
    }

    /// Run the assistant with `prompt` as a single argument.
    ///
    /// With `allow_write`, the profile's write flag is passed so the assistant
    /// skips its confirmation step and may modify files.
    pub fn invoke(&self, phase: Phase, prompt: &str, allow_write: bool) -> Result<AssistantOutput> {
        let (program, args) = build_command_line(&self.profile, prompt, allow_write)?;

        let mut command = Command::new(&program);
        command.args(&args).current_dir(&self.project_root);

        for (key, value) in &self.profile.environment {
            command.env(key, value);
        }

        let start_time = Instant::now();
        let output = command
            .output()
            .map_err(|source| AdwError::AssistantLaunchFailed {
                program: program.clone(),
                source,
            })?;
        let duration = start_time.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if self.echo {
            println!("{}", stdout);
        }

        let logged = match self.log_dir {
            Some(ref dir) => {
                write_phase_logs(&dir.join(phase.to_string()), prompt, &stdout, &stderr)
            }
            None => Ok(()),
        };

        // A failed assistant outranks a failed log write.
        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AdwError::AssistantInvocationFailed {
                phase: phase.to_string(),
                status,
                stderr,
            });
        }

        logged?;

        Ok(AssistantOutput {
            stdout,
            stderr,
            duration,
        })
    }
}

/// Build the program and argument list for one invocation.
///
/// The result is `command... [write_flag] prompt_flag <prompt>`, with the
/// configured command split using shell quoting rules.
pub fn build_command_line(
    profile: &AssistantProfile,
    prompt: &str,
    allow_write: bool,
) -> Result<(String, Vec<String>)> {
    let mut words = shell_words::split(&profile.command).map_err(|e| {
        AdwError::Config(format!(
            "failed to parse assistant command '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            profile.command, e
        ))
    })?;

    if words.first().is_none_or(|program| program.is_empty()) {
        return Err(AdwError::Config(format!(
            "assistant command is empty after parsing: '{}'",
            profile.command
        )));
    }

    let program = words.remove(0);
    let mut args = words;

    if allow_write && !profile.write_flag.is_empty() {
        args.push(profile.write_flag.clone());
    }
    args.push(profile.prompt_flag.clone());
    args.push(prompt.to_string());

    Ok((program, args))
}

fn write_phase_logs(dir: &Path, prompt: &str, stdout: &str, stderr: &str) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AdwError::io(
            format!("failed to create run log directory '{}'", dir.display()),
            e,
        )
    })?;

    for (name, content) in [
        ("prompt.md", prompt),
        ("stdout.log", stdout),
        ("stderr.log", stderr),
    ] {
        let path = dir.join(name);
        std::fs::write(&path, content)
            .map_err(|e| AdwError::io(format!("failed to write '{}'", path.display()), e))?;
    }

    Ok(())
}
