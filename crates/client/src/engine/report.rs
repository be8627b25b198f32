use serde::Serialize;

use tabroll_core::service::ServiceError;

/// What a step was doing when its outcome was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Create,
    Process,
    /// The guaranteed-success create preceding a safe delete.
    Recreate,
    Delete,
}

/// Outcome of a single remote call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "detail")]
pub enum StepOutcome {
    Ok,
    Failed(String),
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, StepOutcome::Ok)
    }
}

/// One remote call against one target, with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Partition name, or the refresh target path for ad-hoc processing.
    pub target: String,
    pub kind: StepKind,
    pub outcome: StepOutcome,
}

/// Every remote call attempted during one invocation, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_ok(&mut self, target: &str, kind: StepKind) {
        self.steps.push(StepReport {
            target: target.to_string(),
            kind,
            outcome: StepOutcome::Ok,
        });
    }

    pub(crate) fn push_failed(&mut self, target: &str, kind: StepKind, error: &ServiceError) {
        self.steps.push(StepReport {
            target: target.to_string(),
            kind,
            outcome: StepOutcome::Failed(error.to_string()),
        });
    }

    /// True when every attempted step succeeded.
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|step| step.outcome.is_ok())
    }

    pub fn failure_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| !step.outcome.is_ok())
            .count()
    }
}
