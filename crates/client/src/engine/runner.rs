use tabroll_core::partition::{resolve, PartitionIdentity};
use tabroll_core::rollover::{PlanStep, RolloverPlan, RolloverPolicy};
use tabroll_core::service::{Connection, ExecutionService, Result};

use super::executor::PartitionExecutor;
use super::report::RunReport;
use super::safe_delete::{DeleteMode, RecreateSpec};

impl<'a, S: ExecutionService + Connection> PartitionExecutor<'a, S> {
    /// Runs every plan step strictly in order, one remote call at a
    /// time.
    ///
    /// A connection failure aborts the run. Any other failure is
    /// recorded in the report and the remaining steps are still
    /// attempted, so one failed monthly retirement never blocks the
    /// rest.
    pub async fn run_plan(
        &self,
        policy: &RolloverPolicy,
        plan: &RolloverPlan,
    ) -> Result<RunReport> {
        self.ensure_connected().await?;
        let mut report = RunReport::new();

        for step in &plan.steps {
            let result = match step {
                PlanStep::Ensure {
                    window,
                    name_format,
                    process,
                    refresh_override,
                } => {
                    let resolved = resolve(
                        &policy.sql_template,
                        &policy.placeholder,
                        &policy.date_column,
                        window,
                        &policy.partition_prefix,
                        *name_format,
                    );
                    let identity =
                        PartitionIdentity::new(&policy.database, &policy.table, &resolved.name);
                    let refresh = process.then(|| {
                        refresh_override
                            .clone()
                            .unwrap_or_else(|| policy.refresh_mode.clone())
                    });
                    self.create_partition(
                        &identity,
                        &resolved.query,
                        &policy.data_source,
                        refresh.as_ref(),
                        &mut report,
                    )
                    .await
                }
                PlanStep::Retire {
                    window,
                    name_format,
                } => {
                    let resolved = resolve(
                        &policy.sql_template,
                        &policy.placeholder,
                        &policy.date_column,
                        window,
                        &policy.partition_prefix,
                        *name_format,
                    );
                    let identity =
                        PartitionIdentity::new(&policy.database, &policy.table, &resolved.name);
                    let mode = DeleteMode::Safe(RecreateSpec {
                        query: resolved.query.clone(),
                        data_source: policy.data_source.clone(),
                        refresh: None,
                    });
                    self.delete_partition(&identity, &mode, &mut report).await
                }
            };

            if let Err(error) = result {
                if error.is_fatal() {
                    return Err(error);
                }
                // Already recorded in the report; keep going.
            }
        }

        Ok(report)
    }
}
