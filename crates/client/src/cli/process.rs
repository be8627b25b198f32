//! Ad-hoc processing command.

use clap::Parser;

/// Refresh a database, table, or partition.
///
/// The most specific identifier wins: partition over table over
/// database.
#[derive(Debug, Parser)]
pub struct ProcessCommand {
    /// Target database.
    #[arg(long)]
    pub database: String,
    /// Narrow the scope to one table.
    #[arg(long)]
    pub table: Option<String>,
    /// Narrow the scope to one partition.
    #[arg(long, requires = "table")]
    pub partition: Option<String>,
    /// Refresh mode.
    #[arg(long, default_value = "automatic")]
    pub refresh_mode: String,
}
