//! tabroll CLI entry point.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabroll_client::cli::{Cli, Commands, OutputFormat};
use tabroll_client::engine::{DeleteMode, PartitionExecutor, RecreateSpec, RunReport};
use tabroll_client::output::{format_output, pretty};
use tabroll_client::{ServiceConfig, TabularClient};
use tabroll_core::partition::{resolve, PartitionIdentity, TimeWindow};
use tabroll_core::rollover::{plan_year, plan_year_month, RolloverPlan, RolloverPolicy};
use tabroll_core::service::{Connection, ExecutionService};
use tabroll_core::tmsl::{ProcessTarget, RefreshMode};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabroll=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig {
        endpoint: cli.endpoint.clone(),
        tenant: cli.tenant.clone(),
        credential_ref: cli.credential.clone(),
        location: cli.location.clone(),
    };
    let client = TabularClient::new(config);
    let executor = PartitionExecutor::new(&client);

    match cli.command {
        Commands::Create(cmd) => {
            let window = TimeWindow::new(cmd.start, cmd.end)?;
            let resolved = resolve(
                &cmd.sql,
                &cmd.placeholder,
                &cmd.date_column,
                &window,
                &cmd.prefix,
                cmd.name_format.into(),
            );
            let identity = PartitionIdentity::new(&cmd.database, &cmd.table, &resolved.name);
            let refresh = (!cmd.no_process).then(|| RefreshMode::new(cmd.refresh_mode.clone()));

            let mut report = RunReport::new();
            let result = executor
                .create_partition(
                    &identity,
                    &resolved.query,
                    &cmd.datasource,
                    refresh.as_ref(),
                    &mut report,
                )
                .await;
            emit_report(&report, cli.format, cli.quiet);
            if let Err(error) = result {
                if error.is_fatal() {
                    return Err(error.into());
                }
            }
            exit_on_failure(&report);
        }
        Commands::Delete(cmd) => {
            let identity = PartitionIdentity::new(&cmd.database, &cmd.table, &cmd.partition);
            let mode = if cmd.safe {
                DeleteMode::Safe(RecreateSpec {
                    query: cmd.sql.clone().unwrap_or_default(),
                    data_source: cmd.datasource.clone().unwrap_or_default(),
                    refresh: cmd.refresh_mode.clone().map(RefreshMode::new),
                })
            } else {
                DeleteMode::Plain
            };

            let mut report = RunReport::new();
            let result = executor.delete_partition(&identity, &mode, &mut report).await;
            emit_report(&report, cli.format, cli.quiet);
            if let Err(error) = result {
                if error.is_fatal() {
                    return Err(error.into());
                }
            }
            exit_on_failure(&report);
        }
        Commands::Year(cmd) => {
            let policy = cmd.args.policy();
            let today = cmd
                .args
                .today
                .unwrap_or_else(|| Local::now().date_naive());
            let plan = plan_year(today, &policy)?;
            run_or_print_plan(&executor, &policy, &plan, cmd.args.dry_run, cli.format, cli.quiet)
                .await?;
        }
        Commands::YearMonth(cmd) => {
            let policy = cmd.args.policy();
            let today = cmd
                .args
                .today
                .unwrap_or_else(|| Local::now().date_naive());
            let plan = plan_year_month(today, &policy)?;
            run_or_print_plan(&executor, &policy, &plan, cmd.args.dry_run, cli.format, cli.quiet)
                .await?;
        }
        Commands::Process(cmd) => {
            let target = ProcessTarget::from_parts(
                cmd.database.clone(),
                cmd.table.clone(),
                cmd.partition.clone(),
            );
            let mut report = RunReport::new();
            let result = executor
                .process(target, RefreshMode::new(cmd.refresh_mode.clone()), &mut report)
                .await;
            emit_report(&report, cli.format, cli.quiet);
            if let Err(error) = result {
                if error.is_fatal() {
                    return Err(error.into());
                }
            }
            exit_on_failure(&report);
        }
    }

    Ok(())
}

/// Executes a rollover plan, or prints it when dry-running.
async fn run_or_print_plan<S: ExecutionService + Connection>(
    executor: &PartitionExecutor<'_, S>,
    policy: &RolloverPolicy,
    plan: &RolloverPlan,
    dry_run: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if dry_run {
        match format {
            OutputFormat::Json => println!("{}", format_output(plan, format)),
            OutputFormat::Pretty => println!("{}", pretty::format_plan(policy, plan)),
        }
        return Ok(());
    }
    let report = executor.run_plan(policy, plan).await?;
    emit_report(&report, format, quiet);
    exit_on_failure(&report);
    Ok(())
}

/// Prints a run report. With `--quiet`, a fully successful pretty
/// report is suppressed; failures always print.
fn emit_report(report: &RunReport, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => println!("{}", format_output(report, format)),
        OutputFormat::Pretty => {
            if !quiet || !report.succeeded() {
                println!("{}", pretty::format_report(report));
            }
        }
    }
}

/// Step failures were already reported per step; the process still
/// signals them through its exit code.
fn exit_on_failure(report: &RunReport) {
    if !report.succeeded() {
        std::process::exit(1);
    }
}
