use serde::{Deserialize, Serialize};

use crate::tmsl::RefreshMode;

/// Caller-supplied configuration for one rollover evaluation.
///
/// Immutable for the duration of the evaluation; there are no session
/// defaults hiding behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverPolicy {
    pub database: String,
    pub table: String,
    pub data_source: String,
    /// Prefix every partition name starts with, e.g. `Fact_`.
    pub partition_prefix: String,
    /// SQL template carrying the placeholder token exactly once.
    pub sql_template: String,
    pub placeholder: String,
    pub date_column: String,
    /// Default refresh mode for processing steps.
    pub refresh_mode: RefreshMode,
    /// Suppresses every processing step of the evaluation, leaving newly
    /// (re)created partitions unprocessed.
    pub create_only: bool,
}
