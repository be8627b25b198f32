use tabroll_core::partition::PartitionIdentity;
use tabroll_core::service::{Connection, ExecutionService, Result};
use tabroll_core::tmsl::{
    contains_raw_quotes, PartitionOperation, ProcessTarget, ProcessingRequest, RefreshMode,
};

use super::report::{RunReport, StepKind};

/// Executes partition operations against one execution service.
///
/// The only component that reaches the network; callers hand it a
/// service implementing both [`ExecutionService`] and [`Connection`].
pub struct PartitionExecutor<'a, S> {
    service: &'a S,
}

impl<'a, S: ExecutionService + Connection> PartitionExecutor<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub(super) fn service(&self) -> &S {
        self.service
    }

    /// Connection is a precondition of every public operation.
    pub(super) async fn ensure_connected(&self) -> Result<()> {
        if !self.service.is_connected() {
            self.service.connect().await?;
        }
        Ok(())
    }

    /// Creates (or replaces) the partition and, when `refresh` is set,
    /// processes it at partition scope.
    ///
    /// Returns `Err` only when the create itself fails. A processing
    /// failure is recorded in the report and the creation stands; there
    /// is no transaction spanning create and process to roll back.
    pub async fn create_partition(
        &self,
        identity: &PartitionIdentity,
        query: &str,
        data_source: &str,
        refresh: Option<&RefreshMode>,
        report: &mut RunReport,
    ) -> Result<()> {
        self.ensure_connected().await?;
        if contains_raw_quotes(query) || contains_raw_quotes(&identity.partition) {
            tracing::warn!(
                partition = %identity.partition,
                "raw quote in query or name; the rendered document may be corrupt"
            );
        }
        let operation = PartitionOperation::CreateOrReplace {
            identity: identity.clone(),
            query: query.to_string(),
            data_source: data_source.to_string(),
        };
        match self.service.execute(&operation.to_script()).await {
            Ok(()) => {
                tracing::info!(partition = %identity.partition, "partition created");
                report.push_ok(&identity.partition, StepKind::Create);
            }
            Err(error) => {
                report.push_failed(&identity.partition, StepKind::Create, &error);
                return Err(error);
            }
        }

        if let Some(mode) = refresh {
            let request = ProcessingRequest {
                target: ProcessTarget::Partition {
                    database: identity.database.clone(),
                    table: identity.table.clone(),
                    partition: identity.partition.clone(),
                },
                refresh_mode: mode.clone(),
            };
            match self.service.process(&request).await {
                Ok(()) => report.push_ok(&identity.partition, StepKind::Process),
                Err(error) => {
                    tracing::warn!(
                        partition = %identity.partition,
                        %error,
                        "processing failed after successful create"
                    );
                    report.push_failed(&identity.partition, StepKind::Process, &error);
                }
            }
        }
        Ok(())
    }

    /// Ad-hoc processing at the chosen granularity.
    pub async fn process(
        &self,
        target: ProcessTarget,
        refresh_mode: RefreshMode,
        report: &mut RunReport,
    ) -> Result<()> {
        self.ensure_connected().await?;
        let path = target.describe();
        let request = ProcessingRequest {
            target,
            refresh_mode,
        };
        match self.service.process(&request).await {
            Ok(()) => {
                report.push_ok(&path, StepKind::Process);
                Ok(())
            }
            Err(error) => {
                report.push_failed(&path, StepKind::Process, &error);
                Err(error)
            }
        }
    }
}
