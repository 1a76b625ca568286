//! Call command - invokes one tool without an MCP host.

use std::process::ExitCode;

use anyhow::{Context as _, Result, bail};
use clap::Args;
use serde_json::Value;

use super::Context;

/// Arguments for the call command.
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name, e.g. search_components
    pub tool: String,

    /// Tool arguments as a JSON object, e.g. '{"query": "button"}'
    pub args: Option<String>,
}

/// Run the call command. Prints the outcome; exits non-zero on failure.
pub async fn run(args: CallArgs, ctx: &Context) -> Result<ExitCode> {
    let registry = ctx.registry()?;
    if !registry.contains(&args.tool) {
        bail!(
            "unknown tool '{}' (available: {})",
            args.tool,
            registry.names().join(", ")
        );
    }

    let arguments: Value = match &args.args {
        Some(raw) => serde_json::from_str(raw).context("tool arguments must be valid JSON")?,
        None => Value::Null,
    };

    let outcome = registry.call(&args.tool, arguments).await?;
    println!("{}", outcome.to_text());

    Ok(if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
