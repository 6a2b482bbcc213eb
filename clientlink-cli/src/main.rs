//! Clientlink CLI - the agency's integrations from your terminal

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

use commands::{billing, doctor, files, latency, logs, search, status};

/// Clientlink - search clients, fetch project files and check billing
#[derive(Parser)]
#[command(name = "clink", version, about, long_about = None)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search accounts, sub-accounts and work items
    Search {
        /// Text to look for (at least two characters)
        query: String,
        /// Only search records owned by this account
        #[arg(long)]
        account: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List, link and upload project files
    Files {
        #[command(subcommand)]
        command: files::FilesCommands,
    },

    /// Payments, invoices and customer summaries
    Billing {
        #[command(subcommand)]
        command: billing::BillingCommands,
    },

    /// Show record counts across the backends
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run consistency checks across the backends
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage simulated backend latency
    Latency {
        #[command(subcommand)]
        command: Option<latency::LatencyCommands>,
    },

    /// View and manage the activity log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

/// Diagnostics go to stderr so JSON output stays clean.
/// `--verbose` wins over `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search { query, account, json } => {
            search::run(&query, account.as_deref(), json).await
        }
        Commands::Files { command } => files::run(command).await,
        Commands::Billing { command } => billing::run(command).await,
        Commands::Status { json } => status::run(json).await,
        Commands::Doctor { json } => doctor::run(cli.verbose, json).await,
        Commands::Latency { command } => latency::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
