//! Health command - reports liveness and readiness.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use console::{Style, style};
use serde::Serialize;

use compkit_mcp::{HealthCheck, liveness};

use super::Context;

/// Arguments for the health command.
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Also probe the component API's /health endpoint
    #[arg(long)]
    pub remote: bool,
}

/// Health report for JSON output.
#[derive(Debug, Serialize)]
struct HealthOutput {
    live: bool,
    ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote: Option<bool>,
    api_url: String,
    missing_tools: Vec<&'static str>,
}

/// Run the health command. Exits non-zero when not ready.
pub async fn run(args: HealthArgs, ctx: &Context) -> Result<ExitCode> {
    let client = ctx.client()?;
    let check = HealthCheck::new(ctx.registry()?).with_remote(client);

    let ready = check.is_ready();
    let remote = if args.remote {
        Some(check.is_ready_remote().await)
    } else {
        None
    };
    let output = HealthOutput {
        live: liveness(),
        ready,
        remote,
        api_url: ctx.config.api.base_url.clone(),
        missing_tools: check.missing_tools(),
    };
    let healthy = output.live && output.ready && output.remote.unwrap_or(true);

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let dim = Style::new().dim();
        let status = |ok: bool| {
            if ok {
                Style::new().green().apply_to("● ok")
            } else {
                Style::new().red().apply_to("● failing")
            }
        };

        println!();
        println!("{}", style("compkit health").bold());
        println!("{}", dim.apply_to("─".repeat(40)));
        println!();
        println!("  {} {}", dim.apply_to("Live:  "), status(output.live));
        println!("  {} {}", dim.apply_to("Ready: "), status(output.ready));
        if let Some(remote) = output.remote {
            println!("  {} {}", dim.apply_to("Remote:"), status(remote));
        }
        println!("  {} {}", dim.apply_to("API:   "), output.api_url);
        if !output.missing_tools.is_empty() {
            println!(
                "  {} {}",
                dim.apply_to("Missing:"),
                output.missing_tools.join(", ")
            );
        }
        println!();
    }

    Ok(if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
