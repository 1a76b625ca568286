//! compkit - MCP server for the component library API
//!
//! Main entry point for the compkit CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

mod commands;

use commands::{call, health, serve, tools};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// compkit - MCP server for the component library API
#[derive(Parser)]
#[command(name = "compkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Component API base URL (default: http://localhost:3000/api/mcp)
    #[arg(long, global = true, env = "COMPKIT_API_URL")]
    pub api_url: Option<String>,

    /// Path to a config file (default: <config dir>/compkit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio (default)
    Serve(serve::ServeArgs),

    /// Check liveness and readiness
    Health(health::HealthArgs),

    /// List the available tools
    Tools(tools::ToolsArgs),

    /// Invoke one tool and print its outcome
    Call(call::CallArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = compkit_config::load_config(cli.config.as_deref())
        .context("failed to load configuration")?;
    let mut config = loaded.config;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    // Initialize tracing: console (stderr, human-readable) + rotating JSON file.
    // stdout is reserved for the protocol.
    let filter = if cli.verbose {
        "compkit=debug,compkit_mcp=debug,compkit_client=debug,compkit_config=debug,info"
    } else {
        "compkit=info,compkit_mcp=info,compkit_client=info,warn"
    };
    let console_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    let log_dir = config
        .logging
        .directory
        .clone()
        .or_else(|| compkit_config::xdg_config_dir().map(|d| d.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "compkit.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "compkit=trace,compkit_mcp=trace,compkit_client=trace,compkit_config=trace,info",
                )),
        )
        .init();

    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.path.display(), loaded = source.loaded, "config file");
    }
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = commands::Context {
        config,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        None => serve::run(serve::ServeArgs::default(), &ctx).await,
        Some(Commands::Serve(args)) => serve::run(args, &ctx).await,
        Some(Commands::Health(args)) => health::run(args, &ctx).await,
        Some(Commands::Tools(args)) => tools::run(args, &ctx).await,
        Some(Commands::Call(args)) => call::run(args, &ctx).await,
    }
}
