//! Serve command - runs the MCP server on stdio.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use compkit_mcp::McpServer;

use super::Context;

/// Arguments for the serve command.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until stdin closes.
pub async fn run(_args: ServeArgs, ctx: &Context) -> Result<ExitCode> {
    let registry = ctx.registry()?;
    tracing::info!(api_url = %ctx.config.api.base_url, "serving MCP on stdio");

    McpServer::new(registry).serve_stdio().await?;
    Ok(ExitCode::SUCCESS)
}
