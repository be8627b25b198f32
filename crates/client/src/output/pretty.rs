//! Pretty output formatting.

use tabroll_core::partition::partition_name;
use tabroll_core::rollover::{PlanStep, RolloverPlan, RolloverPolicy};

use crate::engine::{RunReport, StepKind, StepOutcome};

fn kind_label(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Create => "create",
        StepKind::Process => "process",
        StepKind::Recreate => "recreate",
        StepKind::Delete => "delete",
    }
}

/// Format a run report for display.
pub fn format_report(report: &RunReport) -> String {
    if report.steps.is_empty() {
        return "No steps executed.".to_string();
    }
    let mut output = format!("STEPS ({})\n", report.steps.len());
    output.push_str(&"-".repeat(40));
    for step in &report.steps {
        match &step.outcome {
            StepOutcome::Ok => output.push_str(&format!(
                "\n{:<9} {:<24} ok",
                kind_label(step.kind),
                step.target
            )),
            StepOutcome::Failed(detail) => output.push_str(&format!(
                "\n{:<9} {:<24} FAILED: {}",
                kind_label(step.kind),
                step.target,
                detail
            )),
        }
    }
    output.push('\n');
    output
}

/// Format a computed rollover plan for display.
pub fn format_plan(policy: &RolloverPolicy, plan: &RolloverPlan) -> String {
    if plan.is_empty() {
        return "Empty plan.".to_string();
    }
    let mut output = format!("PLAN ({} steps)\n", plan.len());
    output.push_str(&"-".repeat(40));
    for step in &plan.steps {
        match step {
            PlanStep::Ensure {
                window,
                name_format,
                process,
                refresh_override,
            } => {
                let name = partition_name(&policy.partition_prefix, window.start, *name_format);
                let refresh = if *process {
                    refresh_override
                        .as_ref()
                        .unwrap_or(&policy.refresh_mode)
                        .to_string()
                } else {
                    "none".to_string()
                };
                output.push_str(&format!(
                    "\nensure  {:<24} [{}, {})  refresh={}",
                    name, window.start, window.end, refresh
                ));
            }
            PlanStep::Retire {
                window,
                name_format,
            } => {
                let name = partition_name(&policy.partition_prefix, window.start, *name_format);
                output.push_str(&format!(
                    "\nretire  {:<24} [{}, {})",
                    name, window.start, window.end
                ));
            }
        }
    }
    output.push('\n');
    output
}
