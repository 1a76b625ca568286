//! Tools command - lists the tools the server exposes.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use console::{Style, style};

use super::Context;

/// Arguments for the tools command.
#[derive(Args, Debug)]
pub struct ToolsArgs {}

/// Run the tools command.
pub async fn run(_args: ToolsArgs, ctx: &Context) -> Result<ExitCode> {
    let definitions = ctx.registry()?.definitions();

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(ExitCode::SUCCESS);
    }

    let dim = Style::new().dim();
    let width = definitions.iter().map(|d| d.name.len()).max().unwrap_or(0);

    println!();
    println!("{}", style("Available tools").bold());
    println!("{}", dim.apply_to("─".repeat(40)));
    println!();
    for def in &definitions {
        println!(
            "  {}  {}",
            style(format!("{:width$}", def.name)).cyan(),
            dim.apply_to(def.description.as_deref().unwrap_or("")),
        );
    }
    if ctx.verbose {
        for def in &definitions {
            println!();
            println!("{}", style(&def.name).bold());
            println!("{}", serde_json::to_string_pretty(&def.input_schema)?);
        }
    }
    println!();

    Ok(ExitCode::SUCCESS)
}
