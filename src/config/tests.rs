//! Tests for config functionality.

use crate::config::Config;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.commands_dir, PathBuf::from(".claude/commands"));
    assert_eq!(config.plan_template, "chore");
    assert_eq!(config.implement_template, "implement");
    assert_eq!(config.plan_extension, ".md");
    assert!(config.echo_output);
    assert!(config.log_dir.is_none());
    assert_eq!(config.assistant.command, "claude");
    assert_eq!(config.assistant.prompt_flag, "-p");
    assert_eq!(
        config.assistant.write_flag,
        "--dangerously-skip-permissions"
    );
    assert!(config.assistant.environment.is_empty());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.plan_template, "chore");
    assert_eq!(config.assistant.command, "claude");
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
plan_template: bug
assistant:
  command: "npx claude"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.plan_template, "bug");
    assert_eq!(config.assistant.command, "npx claude");

    // Unspecified values should use defaults
    assert_eq!(config.implement_template, "implement");
    assert_eq!(config.assistant.prompt_flag, "-p");
    assert_eq!(
        config.assistant.write_flag,
        "--dangerously-skip-permissions"
    );
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
commands_dir: prompts
plan_template: feature
implement_template: build
plan_extension: .markdown
echo_output: false
log_dir: agents
assistant:
  command: my-assistant --model fast
  prompt_flag: --prompt
  write_flag: --yes
  environment:
    ASSISTANT_MODE: batch
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.commands_dir, PathBuf::from("prompts"));
    assert_eq!(config.plan_template, "feature");
    assert_eq!(config.implement_template, "build");
    assert_eq!(config.plan_extension, ".markdown");
    assert!(!config.echo_output);
    assert_eq!(config.log_dir, Some(PathBuf::from("agents")));
    assert_eq!(config.assistant.command, "my-assistant --model fast");
    assert_eq!(config.assistant.prompt_flag, "--prompt");
    assert_eq!(config.assistant.write_flag, "--yes");
    assert_eq!(
        config.assistant.environment.get("ASSISTANT_MODE"),
        Some(&"batch".to_string())
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
plan_template: chore
future_field: 42
assistant:
  command: claude
  some_new_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.plan_template, "chore");
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let result = Config::from_yaml("plan_template: [unclosed");
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to parse config YAML")
    );
}

#[test]
fn test_validation_rejects_empty_command() {
    let yaml = r#"
assistant:
  command: "  "
"#;
    let err = Config::from_yaml(yaml).unwrap_err().to_string();
    assert!(err.contains("assistant.command"));
}

#[test]
fn test_validation_rejects_extension_without_dot() {
    let err = Config::from_yaml("plan_extension: md")
        .unwrap_err()
        .to_string();
    assert!(err.contains("plan_extension must start with a dot"));
    assert!(err.contains("'.md'"));
}

#[test]
fn test_validation_rejects_template_paths() {
    let err = Config::from_yaml("plan_template: ../secrets")
        .unwrap_err()
        .to_string();
    assert!(err.contains("plan_template"));
    assert!(err.contains("not a path"));
}

#[test]
fn test_yaml_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.plan_template = "bug".to_string();
    config.log_dir = Some(PathBuf::from("agents"));

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.plan_template, "bug");
    assert_eq!(parsed.log_dir, Some(PathBuf::from("agents")));
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("config.yaml")).unwrap();
    assert_eq!(config.plan_template, "chore");
}

#[test]
fn test_load_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "plan_template: bug\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.plan_template, "bug");
}

#[test]
fn test_load_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml"))
        .unwrap_err()
        .to_string();
    assert!(err.contains("failed to read config file"));
}
