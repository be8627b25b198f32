use tabroll_core::partition::PartitionIdentity;
use tabroll_core::service::{Connection, ExecutionService, Result};
use tabroll_core::tmsl::{PartitionOperation, ProcessTarget, ProcessingRequest, RefreshMode};

use super::executor::PartitionExecutor;
use super::report::{RunReport, StepKind};

/// Recreate specification for the safe-delete protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecreateSpec {
    pub query: String,
    pub data_source: String,
    /// When set, the recreated partition is refreshed before deletion.
    /// A failure here is reported but never stops the delete.
    pub refresh: Option<RefreshMode>,
}

/// How a delete is carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteMode {
    /// Delete directly; the caller asserts the partition exists.
    Plain,
    /// Create-or-replace the same identity first, so the delete targets
    /// an object known to exist. The service's delete-on-nonexistent
    /// behavior is undefined and never relied upon.
    Safe(RecreateSpec),
}

impl<'a, S: ExecutionService + Connection> PartitionExecutor<'a, S> {
    /// Deletes the partition under the given mode.
    ///
    /// Safe mode: a recreate failure aborts the whole operation and the
    /// delete is never attempted. A delete failure is reported with no
    /// compensating action. Only the recreate's creation matters for
    /// aborting; its refresh failing does not stop the delete.
    pub async fn delete_partition(
        &self,
        identity: &PartitionIdentity,
        mode: &DeleteMode,
        report: &mut RunReport,
    ) -> Result<()> {
        self.ensure_connected().await?;

        if let DeleteMode::Safe(spec) = mode {
            let recreate = PartitionOperation::CreateOrReplace {
                identity: identity.clone(),
                query: spec.query.clone(),
                data_source: spec.data_source.clone(),
            };
            match self.service().execute(&recreate.to_script()).await {
                Ok(()) => report.push_ok(&identity.partition, StepKind::Recreate),
                Err(error) => {
                    report.push_failed(&identity.partition, StepKind::Recreate, &error);
                    return Err(error);
                }
            }
            if let Some(refresh_mode) = &spec.refresh {
                let request = ProcessingRequest {
                    target: ProcessTarget::Partition {
                        database: identity.database.clone(),
                        table: identity.table.clone(),
                        partition: identity.partition.clone(),
                    },
                    refresh_mode: refresh_mode.clone(),
                };
                match self.service().process(&request).await {
                    Ok(()) => report.push_ok(&identity.partition, StepKind::Process),
                    Err(error) => {
                        tracing::warn!(
                            partition = %identity.partition,
                            %error,
                            "recreate refresh failed; delete proceeds"
                        );
                        report.push_failed(&identity.partition, StepKind::Process, &error);
                    }
                }
            }
        }

        let delete = PartitionOperation::Delete {
            identity: identity.clone(),
        };
        match self.service().execute(&delete.to_script()).await {
            Ok(()) => {
                tracing::info!(partition = %identity.partition, "partition deleted");
                report.push_ok(&identity.partition, StepKind::Delete);
                Ok(())
            }
            Err(error) => {
                report.push_failed(&identity.partition, StepKind::Delete, &error);
                Err(error)
            }
        }
    }
}
