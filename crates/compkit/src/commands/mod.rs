//! CLI command handlers.

pub mod call;
pub mod health;
pub mod serve;
pub mod tools;

use std::sync::Arc;

use anyhow::{Context as _, Result};

use compkit_client::ComponentClient;
use compkit_config::CompkitConfig;
use compkit_mcp::ToolRegistry;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved configuration (file, environment and flags).
    pub config: CompkitConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build a component API client from the configuration.
    pub fn client(&self) -> Result<ComponentClient> {
        let api = &self.config.api;
        let mut builder = ComponentClient::builder().base_url(&api.base_url);
        if let Some(token) = &api.auth_token {
            builder = builder.auth_token(token);
        }
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .with_context(|| format!("invalid component API URL '{}'", api.base_url))
    }

    /// Build the tool registry, backed by a fresh client.
    pub fn registry(&self) -> Result<ToolRegistry> {
        Ok(ToolRegistry::with_component_tools(Arc::new(self.client()?)))
    }
}
