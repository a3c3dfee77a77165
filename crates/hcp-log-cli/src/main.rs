use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::chat::ChatArgs;
use commands::edit::EditArgs;
use commands::log::LogArgs;

#[derive(Parser)]
#[command(name = "hcp-log")]
#[command(about = "Log and edit HCP interactions against the CRM backend", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config file and HCP_LOG_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path to config.toml (default: ~/.config/hcp-log/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the HCPs known to the backend
    Hcps,
    /// Log an interaction from form fields
    Log(LogArgs),
    /// Describe an interaction in free text and let the chat agent log it
    Chat(ChatArgs),
    /// Patch fields of an existing interaction through the edit agent
    Edit(EditArgs),
    /// Inspect stored interactions
    Interactions {
        /// Show a single interaction instead of listing all
        id: Option<i64>,
    },
    /// Show recent backend tool runs, oldest first
    ToolRuns,
    /// Check that the backend is reachable
    Health,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref(), cli.base_url.as_deref())?;
    tracing::debug!(
        "[hcp-log] Backend {} (timeout {}s, {} submissions)",
        config.base_url,
        config.request_timeout_secs,
        config.concurrency
    );

    match cli.command {
        Commands::Hcps => commands::hcps::run(&config).await?,
        Commands::Log(args) => commands::log::run(&config, args).await?,
        Commands::Chat(args) => commands::chat::run(&config, args).await?,
        Commands::Edit(args) => commands::edit::run(&config, args).await?,
        Commands::Interactions { id } => commands::interactions::run(&config, id).await?,
        Commands::ToolRuns => commands::tool_runs::run(&config).await?,
        Commands::Health => commands::health::run(&config).await?,
    }

    Ok(())
}
