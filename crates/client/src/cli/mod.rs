//! CLI command definitions.

pub mod partitions;
pub mod process;
pub mod rollover;

use clap::{Parser, Subcommand, ValueEnum};

use tabroll_core::partition::NameFormat;

/// Partition lifecycle automation for tabular models.
#[derive(Debug, Parser)]
#[command(name = "tabroll")]
#[command(about = "Partition lifecycle automation for tabular models", long_about = None)]
pub struct Cli {
    /// Execution service endpoint.
    #[arg(long, env = "TABROLL_ENDPOINT", default_value = "http://localhost:8080")]
    pub endpoint: String,

    /// Tenant of the service session.
    #[arg(long, env = "TABROLL_TENANT", default_value = "")]
    pub tenant: String,

    /// Credential reference; resolved by the service, never read here.
    #[arg(long, env = "TABROLL_CREDENTIAL", default_value = "")]
    pub credential: String,

    /// Service location.
    #[arg(long, env = "TABROLL_LOCATION", default_value = "")]
    pub location: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI naming pattern (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NameFormatArg {
    /// `2019`
    Year,
    /// `Jan-2019`
    MonthYear,
}

impl From<NameFormatArg> for NameFormat {
    fn from(format: NameFormatArg) -> Self {
        match format {
            NameFormatArg::Year => NameFormat::Year,
            NameFormatArg::MonthYear => NameFormat::MonthYear,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a time-based partition.
    Create(partitions::CreateCommand),
    /// Delete a partition, optionally via the safe-delete protocol.
    Delete(partitions::DeleteCommand),
    /// Year-policy rollover.
    Year(rollover::YearCommand),
    /// Year+month-policy rollover.
    YearMonth(rollover::YearMonthCommand),
    /// Ad-hoc processing at database, table, or partition scope.
    Process(process::ProcessCommand),
}
