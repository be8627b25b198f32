//! Rollover policy commands.

use chrono::NaiveDate;
use clap::{Args, Parser};

use tabroll_core::rollover::RolloverPolicy;
use tabroll_core::tmsl::RefreshMode;

/// Parameters shared by both rollover policies.
#[derive(Debug, Args)]
pub struct RolloverArgs {
    /// Target database.
    #[arg(long)]
    pub database: String,
    /// Target table.
    #[arg(long)]
    pub table: String,
    /// Data source name for partition definitions.
    #[arg(long)]
    pub datasource: String,
    /// Partition name prefix, e.g. `Fact_`.
    #[arg(long)]
    pub prefix: String,
    /// SQL template carrying the placeholder token once.
    #[arg(long)]
    pub sql: String,
    /// Placeholder token replaced by the window condition.
    #[arg(long, default_value = "{0}")]
    pub placeholder: String,
    /// Date column compared against window boundaries.
    #[arg(long)]
    pub date_column: String,
    /// Default refresh mode for processing steps.
    #[arg(long, default_value = "automatic")]
    pub refresh_mode: String,
    /// Create partitions without processing them.
    #[arg(long)]
    pub create_only: bool,
    /// Print the computed plan without calling the service.
    #[arg(long)]
    pub dry_run: bool,
    /// Evaluate the policy as if today were this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl RolloverArgs {
    /// Builds the immutable policy for one evaluation.
    pub fn policy(&self) -> RolloverPolicy {
        RolloverPolicy {
            database: self.database.clone(),
            table: self.table.clone(),
            data_source: self.datasource.clone(),
            partition_prefix: self.prefix.clone(),
            sql_template: self.sql.clone(),
            placeholder: self.placeholder.clone(),
            date_column: self.date_column.clone(),
            refresh_mode: RefreshMode::new(self.refresh_mode.clone()),
            create_only: self.create_only,
        }
    }
}

/// Year-policy rollover command.
#[derive(Debug, Parser)]
pub struct YearCommand {
    #[command(flatten)]
    pub args: RolloverArgs,
}

/// Year+month-policy rollover command.
#[derive(Debug, Parser)]
pub struct YearMonthCommand {
    #[command(flatten)]
    pub args: RolloverArgs,
}
