//! Partition create/delete commands.

use chrono::NaiveDate;
use clap::Parser;

use super::NameFormatArg;

/// Create a partition bound to an explicit time window.
#[derive(Debug, Parser)]
pub struct CreateCommand {
    /// Target database.
    #[arg(long)]
    pub database: String,
    /// Target table.
    #[arg(long)]
    pub table: String,
    /// Partition name prefix, e.g. `Fact_`.
    #[arg(long)]
    pub prefix: String,
    /// Data source name for the partition definition.
    #[arg(long)]
    pub datasource: String,
    /// SQL template carrying the placeholder token once.
    #[arg(long)]
    pub sql: String,
    /// Placeholder token replaced by the window condition.
    #[arg(long, default_value = "{0}")]
    pub placeholder: String,
    /// Date column compared against the window boundaries.
    #[arg(long)]
    pub date_column: String,
    /// Window start (YYYY-MM-DD), also the naming anchor.
    #[arg(long)]
    pub start: NaiveDate,
    /// Window end, exclusive (YYYY-MM-DD).
    #[arg(long)]
    pub end: NaiveDate,
    /// Naming pattern applied to the start date.
    #[arg(long, value_enum, default_value = "month-year")]
    pub name_format: NameFormatArg,
    /// Refresh mode for the processing step.
    #[arg(long, default_value = "automatic")]
    pub refresh_mode: String,
    /// Create without processing.
    #[arg(long)]
    pub no_process: bool,
}

/// Delete a partition by its full name.
#[derive(Debug, Parser)]
pub struct DeleteCommand {
    /// Target database.
    #[arg(long)]
    pub database: String,
    /// Target table.
    #[arg(long)]
    pub table: String,
    /// Full partition name.
    #[arg(long)]
    pub partition: String,
    /// Recreate the partition first so the delete never targets a
    /// missing object.
    #[arg(long)]
    pub safe: bool,
    /// Recreate query (safe mode).
    #[arg(long, required_if_eq("safe", "true"))]
    pub sql: Option<String>,
    /// Recreate data source (safe mode).
    #[arg(long, required_if_eq("safe", "true"))]
    pub datasource: Option<String>,
    /// Refresh the recreated partition before deleting (safe mode).
    #[arg(long)]
    pub refresh_mode: Option<String>,
}
