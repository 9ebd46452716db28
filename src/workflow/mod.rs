//! Plan-then-implement workflow driver.
//!
//! The workflow is a linear state machine:
//!
//! ```text
//! Start -> PlanPromptBuilt -> PlanGenerated -> PlanPathExtracted -> PlanRead
//!       -> ImplementPromptBuilt -> Implemented -> Done
//! ```
//!
//! Any failure is terminal: the error is returned immediately and the run
//! stops at the last stage reached. Nothing is retried.

use crate::assistant::{AssistantInvoker, Phase};
use crate::config::Config;
use crate::context::{ProjectContext, validate_run_id};
use crate::error::{AdwError, Result};
use crate::events::{Event, EventLog};
use crate::issue::IssueRecord;
use crate::plan_path::{extract_plan_path, read_plan, resolve_plan_path};
use crate::prompt::{Placeholders, load_template};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::path::PathBuf;


const RULE_WIDTH: usize = 60;

/// Stages of a workflow run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    PlanPromptBuilt,
    PlanGenerated,
    PlanPathExtracted,
    PlanRead,
    ImplementPromptBuilt,
    Implemented,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::PlanPromptBuilt => "plan_prompt_built",
            Stage::PlanGenerated => "plan_generated",
            Stage::PlanPathExtracted => "plan_path_extracted",
            Stage::PlanRead => "plan_read",
            Stage::ImplementPromptBuilt => "implement_prompt_built",
            Stage::Implemented => "implemented",
            Stage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct WorkflowRequest {
    /// Free-text task description.
    pub description: String,
    /// Run identifier, substituted as `$2`.
    pub adw_id: String,
    /// Issue number, substituted as `$1` and embedded in the issue record.
    pub issue_number: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub adw_id: String,
    /// Absolute path of the plan file that was implemented.
    pub plan_path: PathBuf,
    pub stage: Stage,
}

/// Generate a run identifier from the current UTC time.
pub fn generate_adw_id() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Sequences template loading, prompt building and both assistant phases.
pub struct WorkflowDriver {
    ctx: ProjectContext,
    config: Config,
    stage: Stage,
    events: Option<EventLog>,
}

impl WorkflowDriver {
    pub fn new(ctx: ProjectContext, config: Config) -> Self {
        Self {
            ctx,
            config,
            stage: Stage::Start,
            events: None,
        }
    }

    /// Last stage reached.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run both phases for `request`.
    pub fn run(&mut self, request: &WorkflowRequest) -> Result<RunSummary> {
        let description = request.description.trim();
        if description.is_empty() {
            return Err(AdwError::UsageError(
                "task description must not be empty".to_string(),
            ));
        }

        validate_run_id(&request.adw_id)?;

        self.stage = Stage::Start;
        self.events = self.ctx.run_log_dir(&request.adw_id).map(EventLog::new);

        let result = self.run_stages(description, request);
        if let Err(ref err) = result {
            // The run log is best-effort once the run has already failed.
            let _ = self.record(
                self.stage,
                &request.adw_id,
                json!({"failed": true, "error": err.to_string()}),
            );
        }
        result
    }

    fn run_stages(&mut self, description: &str, request: &WorkflowRequest) -> Result<RunSummary> {
        let adw_id = request.adw_id.as_str();
        let extension = self.config.plan_extension.clone();
        let plan_name = self.config.plan_template.clone();
        let implement_name = self.config.implement_template.clone();

        self.record(Stage::Start, adw_id, json!({"description": description}))?;

        let invoker = AssistantInvoker::new(
            self.config.assistant.clone(),
            self.ctx.project_root.clone(),
        )
        .echo(self.config.echo_output)
        .log_dir(self.ctx.run_log_dir(adw_id));

        // Phase 1: plan
        print_banner("STEP 1: Creating plan (spec)", false);

        let issue = IssueRecord::from_task(description, &plan_name, request.issue_number.clone());
        let plan_template = load_template(&self.ctx, &plan_name)?;
        let plan_prompt = Placeholders::new()
            .with_positional(1, request.issue_number.clone())
            .with_positional(2, adw_id)
            .with_positional(3, issue.to_json()?)
            .render(&plan_name, &plan_template)?;
        self.advance(Stage::PlanPromptBuilt, adw_id, json!({"template": plan_name}))?;

        let output = invoker.invoke(Phase::Plan, &plan_prompt, true)?;
        self.advance(
            Stage::PlanGenerated,
            adw_id,
            json!({"duration_ms": output.duration.as_millis() as u64}),
        )?;

        let raw_path =
            extract_plan_path(&output.stdout, &extension).ok_or(AdwError::PathExtractionFailed)?;
        let plan_path = resolve_plan_path(&self.ctx.project_root, &raw_path);
        println!("\nPlan created at: {}", plan_path.display());
        self.advance(
            Stage::PlanPathExtracted,
            adw_id,
            json!({"plan_path": plan_path.display().to_string()}),
        )?;

        // Phase 2: implement
        print_banner("STEP 2: Implementing plan", true);

        let plan = read_plan(&plan_path, &extension)?;
        self.advance(Stage::PlanRead, adw_id, json!({"bytes": plan.len()}))?;

        let implement_template = load_template(&self.ctx, &implement_name)?;
        let implement_prompt = Placeholders::new()
            .with_arguments(plan)
            .render(&implement_name, &implement_template)?;
        self.advance(
            Stage::ImplementPromptBuilt,
            adw_id,
            json!({"template": implement_name}),
        )?;

        let output = invoker.invoke(Phase::Implement, &implement_prompt, true)?;
        self.advance(
            Stage::Implemented,
            adw_id,
            json!({"duration_ms": output.duration.as_millis() as u64}),
        )?;

        print_banner("ADW COMPLETE!", true);
        self.advance(Stage::Done, adw_id, Value::Null)?;

        Ok(RunSummary {
            adw_id: adw_id.to_string(),
            plan_path,
            stage: self.stage,
        })
    }

    fn advance(&mut self, stage: Stage, adw_id: &str, details: Value) -> Result<()> {
        self.stage = stage;
        self.record(stage, adw_id, details)
    }

    fn record(&self, stage: Stage, adw_id: &str, details: Value) -> Result<()> {
        match self.events {
            Some(ref log) => log.append(&Event::new(stage, adw_id).with_details(details)),
            None => Ok(()),
        }
    }
}

fn print_banner(title: &str, leading_newline: bool) {
    let rule = "=".repeat(RULE_WIDTH);
    if leading_newline {
        println!();
    }
    println!("{}", rule);
    println!("{}", title);
    println!("{}", rule);
}
