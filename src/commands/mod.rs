//! Command implementation for adw.
//!
//! Resolves the project root and config, applies command-line overrides,
//! and hands the run to the workflow driver.

use crate::cli::{Cli, usage_text};
use crate::config::Config;
use crate::context::{ProjectContext, default_config_path, resolve_project_root};
use crate::error::{AdwError, Result};
use crate::workflow::{RunSummary, WorkflowDriver, WorkflowRequest, generate_adw_id};

/// Execute a workflow run for the parsed command line.
pub fn dispatch(cli: Cli) -> Result<RunSummary> {
    let description = match cli.description.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => return Err(AdwError::UsageError(usage_text())),
    };

    let project_root = resolve_project_root(cli.project_root.as_deref())?;
    let config = load_config(&cli, &project_root)?;
    let ctx = ProjectContext::new(project_root, &config);

    let request = WorkflowRequest {
        description,
        adw_id: cli.adw_id.clone().unwrap_or_else(generate_adw_id),
        issue_number: cli.issue_number.clone(),
    };

    let mut driver = WorkflowDriver::new(ctx, config);
    driver.run(&request).inspect_err(|_| {
        eprintln!(
            "Run {} stopped after stage: {}",
            request.adw_id,
            driver.stage()
        );
    })
}

/// Load the config file and layer command-line overrides on top.
///
/// An explicit `--config` must exist; the default location is optional.
fn load_config(cli: &Cli, project_root: &std::path::Path) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::load_or_default(default_config_path(project_root))?,
    };

    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref template) = cli.template {
        config.plan_template = template.clone();
    }
    if let Some(ref assistant) = cli.assistant {
        config.assistant.command = assistant.clone();
    }
    if let Some(ref log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if cli.quiet {
        config.echo_output = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["adw"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_missing_description_is_usage_error() {
        for args in [&[][..], &["   "][..]] {
            let err = dispatch(cli(args)).unwrap_err();
            match err {
                AdwError::UsageError(text) => assert!(text.contains("Usage: adw")),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_config_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&cli(&["task"]), temp_dir.path()).unwrap();
        assert_eq!(config.plan_template, "chore");
        assert!(config.echo_output);
    }

    #[test]
    fn test_config_file_and_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let adw_dir = temp_dir.path().join(".adw");
        std::fs::create_dir_all(&adw_dir).unwrap();
        std::fs::write(
            adw_dir.join("config.yaml"),
            "plan_template: feature\nassistant:\n  command: my-assistant\n",
        )
        .unwrap();

        let config = load_config(&cli(&["task"]), temp_dir.path()).unwrap();
        assert_eq!(config.plan_template, "feature");
        assert_eq!(config.assistant.command, "my-assistant");

        let config = load_config(
            &cli(&["-t", "bug", "--assistant", "other", "-q", "--log-dir", "logs", "task"]),
            temp_dir.path(),
        )
        .unwrap();
        assert_eq!(config.plan_template, "bug");
        assert_eq!(config.assistant.command, "other");
        assert!(!config.echo_output);
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");
        let missing = missing.to_str().unwrap();

        let err = load_config(&cli(&["--config", missing, "task"]), temp_dir.path()).unwrap_err();
        assert!(matches!(err, AdwError::Config(_)));
    }

    #[test]
    fn test_invalid_template_override_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(&cli(&["-t", "../escape", "task"]), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("plan_template"));
    }

    #[test]
    fn test_dispatch_rejects_path_like_run_id() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();

        let err = dispatch(cli(&["--project-root", root, "--adw-id", "../../x", "task"]))
            .unwrap_err();
        assert!(err.to_string().contains("run id"), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn test_dispatch_runs_workflow() {
        use crate::test_support::{script_profile, write_script, write_templates};
        use crate::workflow::Stage;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("project");
        std::fs::create_dir_all(&root).unwrap();
        write_templates(&root, "chore", "PLAN $1 $2 $3", "IMPL $ARGUMENTS");

        let script = write_script(
            temp_dir.path(),
            "assistant.sh",
            r##"case "$3" in
  PLAN*) mkdir -p specs; echo "# plan" > specs/p.md; echo '`specs/p.md`' ;;
  *) echo "$3" > implemented.txt ;;
esac
"##,
        );
        let command = script_profile(&script).command;

        let summary = dispatch(cli(&[
            "--project-root",
            root.to_str().unwrap(),
            "--assistant",
            &command,
            "--adw-id",
            "fixed",
            "-q",
            "Add logging",
        ]))
        .unwrap();

        assert_eq!(summary.adw_id, "fixed");
        assert_eq!(summary.stage, Stage::Done);
        assert_eq!(
            summary.plan_path,
            root.canonicalize().unwrap().join("specs/p.md")
        );

        assert_eq!(
            std::fs::read_to_string(root.join("implemented.txt")).unwrap(),
            "IMPL # plan\n\n"
        );
    }
}
