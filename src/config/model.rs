//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for an adw project.
///
/// This struct represents the contents of `.adw/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Template settings
    // =========================================================================
    /// Directory holding command templates, relative to the project root.
    #[serde(default = "default_commands_dir")]
    pub commands_dir: PathBuf,

    /// Template used for the planning phase (default: "chore").
    #[serde(default = "default_plan_template")]
    pub plan_template: String,

    /// Template used for the implementation phase (default: "implement").
    #[serde(default = "default_implement_template")]
    pub implement_template: String,

    /// Extension the plan file path must end with (default: ".md").
    #[serde(default = "default_plan_extension")]
    pub plan_extension: String,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Whether assistant output is echoed to the terminal.
    #[serde(default = "default_true")]
    pub echo_output: bool,

    /// Run log directory, relative to the project root. Disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    // =========================================================================
    // Assistant settings
    // =========================================================================
    /// How the external assistant is invoked.
    #[serde(default)]
    pub assistant: AssistantProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commands_dir: default_commands_dir(),
            plan_template: default_plan_template(),
            implement_template: default_implement_template(),
            plan_extension: default_plan_extension(),
            echo_output: true,
            log_dir: None,
            assistant: AssistantProfile::default(),
        }
    }
}

/// Invocation profile for the external assistant.
///
/// The final argv is `command... [write_flag] prompt_flag <prompt>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantProfile {
    /// Program and leading arguments, split with shell quoting rules.
    #[serde(default = "default_assistant_command")]
    pub command: String,

    /// Flag that precedes the prompt argument.
    #[serde(default = "default_prompt_flag")]
    pub prompt_flag: String,

    /// Flag that disables the assistant's confirmation step for writes.
    #[serde(default = "default_write_flag")]
    pub write_flag: String,

    /// Extra environment variables for the assistant process.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
}

impl Default for AssistantProfile {
    fn default() -> Self {
        Self {
            command: default_assistant_command(),
            prompt_flag: default_prompt_flag(),
            write_flag: default_write_flag(),
            environment: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_commands_dir() -> PathBuf {
    PathBuf::from(".claude").join("commands")
}

fn default_plan_template() -> String {
    "chore".to_string()
}

fn default_implement_template() -> String {
    "implement".to_string()
}

fn default_plan_extension() -> String {
    ".md".to_string()
}

fn default_assistant_command() -> String {
    "claude".to_string()
}

fn default_prompt_flag() -> String {
    "-p".to_string()
}

fn default_write_flag() -> String {
    "--dangerously-skip-permissions".to_string()
}
