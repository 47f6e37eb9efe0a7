// crates/dashboard-summary-cli/src/main.rs
// ============================================================================
// Module: Dashboard Summary CLI Entry Point
// Description: Command dispatcher for serving and querying tab summaries.
// Purpose: Run the HTTP server and resolve summaries locally from config.
// Dependencies: clap, dashboard-summary-{config, core, server}, tokio
// ============================================================================

//! ## Overview
//! The `dashboard-summary` binary starts the HTTP server, validates
//! configuration, and resolves summaries locally through the same service the
//! server hosts. Results print as JSON on stdout; errors print on stderr with
//! exit code 1.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use dashboard_summary_config::DashboardSummaryConfig;
use dashboard_summary_config::config_toml_example;
use dashboard_summary_core::GetTabSummaryRequest;
use dashboard_summary_core::ListDashboardsRequest;
use dashboard_summary_core::ListTabSummariesRequest;
use dashboard_summary_core::SummaryAssembler;
use dashboard_summary_core::SummaryError;
use dashboard_summary_core::TabSummaryService;
use dashboard_summary_server::SummaryServer;
use dashboard_summary_server::build_assembler;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "dashboard-summary", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server (REST and JSON-RPC).
    Serve(ConfigArgs),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Resolve summaries locally from configured storage.
    Summary {
        /// Selected summary subcommand.
        #[command(subcommand)]
        command: SummaryCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a configuration file.
    Validate(ConfigArgs),
    /// Print an annotated example configuration.
    Example,
}

/// Summary subcommands.
#[derive(Subcommand, Debug)]
enum SummaryCommand {
    /// List the tab summaries of a dashboard.
    List(SummaryListCommand),
    /// Get the summary of one tab.
    Get(SummaryGetCommand),
    /// List the dashboards configured in a scope.
    Dashboards(SummaryDashboardsCommand),
}

/// Config file selection shared by commands.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Optional config file path (defaults to dashboard-summary.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `summary list`.
#[derive(Args, Debug)]
struct SummaryListCommand {
    /// Dashboard name (case-insensitive).
    #[arg(long, value_name = "NAME")]
    dashboard: String,
    /// Scope token; the configured default when omitted.
    #[arg(long, value_name = "SCOPE")]
    scope: Option<String>,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

/// Arguments for `summary get`.
#[derive(Args, Debug)]
struct SummaryGetCommand {
    /// Dashboard name (case-insensitive).
    #[arg(long, value_name = "NAME")]
    dashboard: String,
    /// Tab name (case-insensitive).
    #[arg(long, value_name = "NAME")]
    tab: String,
    /// Scope token; the configured default when omitted.
    #[arg(long, value_name = "SCOPE")]
    scope: Option<String>,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

/// Arguments for `summary dashboards`.
#[derive(Args, Debug)]
struct SummaryDashboardsCommand {
    /// Scope token; the configured default when omitted.
    #[arg(long, value_name = "SCOPE")]
    scope: Option<String>,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a printable message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run(cli: Cli) -> CliResult<ExitCode> {
    if cli.show_version {
        write_stdout_line(&format!("dashboard-summary {}", env!("CARGO_PKG_VERSION")))?;
        return Ok(ExitCode::SUCCESS);
    }
    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };
    match command {
        Commands::Serve(command) => command_serve(&command).await,
        Commands::Config {
            command,
        } => command_config(&command),
        Commands::Summary {
            command,
        } => command_summary(command).await,
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("")
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: &ConfigArgs) -> CliResult<ExitCode> {
    let config = load_config(command)?;
    let server = SummaryServer::from_config(&config)
        .await
        .map_err(|err| CliError::new(format!("server init failed: {err}")))?;
    write_stderr_line(&format!("dashboard-summary listening on {}", config.server.bind.trim()))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    server.serve().await.map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => {
            load_config(command)?;
            write_stdout_line("config ok")?;
        }
        ConfigCommand::Example => write_stdout_line(config_toml_example().trim_end())?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Loads and validates configuration.
fn load_config(command: &ConfigArgs) -> CliResult<DashboardSummaryConfig> {
    DashboardSummaryConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("config load failed: {err}")))
}

// ============================================================================
// SECTION: Summary Commands
// ============================================================================

/// Dispatches summary subcommands.
async fn command_summary(command: SummaryCommand) -> CliResult<ExitCode> {
    let rendered = match command {
        SummaryCommand::List(command) => {
            let service = local_service(&command.config).await?;
            let request = ListTabSummariesRequest {
                scope: command.scope,
                dashboard: command.dashboard,
            };
            render_json(&service.list_tab_summaries(&request).await.map_err(summary_error)?)?
        }
        SummaryCommand::Get(command) => {
            let service = local_service(&command.config).await?;
            let request = GetTabSummaryRequest {
                scope: command.scope,
                dashboard: command.dashboard,
                tab: command.tab,
            };
            render_json(&service.get_tab_summary(&request).await.map_err(summary_error)?)?
        }
        SummaryCommand::Dashboards(command) => {
            let service = local_service(&command.config).await?;
            let request = ListDashboardsRequest {
                scope: command.scope,
            };
            render_json(&service.list_dashboards(&request).await.map_err(summary_error)?)?
        }
    };
    write_stdout_line(&rendered)?;
    Ok(ExitCode::SUCCESS)
}

/// Builds the store-backed service from configuration.
async fn local_service(command: &ConfigArgs) -> CliResult<SummaryAssembler> {
    let config = load_config(command)?;
    build_assembler(&config).await.map_err(|err| CliError::new(format!("init failed: {err}")))
}

/// Formats a service error. Local use prints full detail.
fn summary_error(err: SummaryError) -> CliError {
    CliError::new(format!("{}: {err}", err.kind_label()))
}

/// Renders a value as pretty JSON.
fn render_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("json render failed: {err}")))
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}").map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
