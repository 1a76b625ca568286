//! Liveness and readiness probes.

use compkit_client::ComponentClient;

use crate::tools::{COMPONENT_TOOLS, ToolRegistry};

/// Process liveness. Always `true` once the binary is running.
pub fn liveness() -> bool {
    true
}

/// Readiness of one server instance.
#[derive(Debug, Clone)]
pub struct HealthCheck {
    registry: ToolRegistry,
    client: Option<ComponentClient>,
}

impl HealthCheck {
    /// Readiness check over a registry, without probing the remote API.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            client: None,
        }
    }

    /// Also probe the component API's `/health` endpoint in
    /// [`is_ready_remote`](Self::is_ready_remote).
    pub fn with_remote(mut self, client: ComponentClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Names of component tools missing from the registry.
    pub fn missing_tools(&self) -> Vec<&'static str> {
        COMPONENT_TOOLS
            .into_iter()
            .filter(|name| !self.registry.contains(name))
            .collect()
    }

    /// `true` when every component tool is registered.
    pub fn is_ready(&self) -> bool {
        let missing = self.missing_tools();
        if !missing.is_empty() {
            tracing::debug!(?missing, "not ready: tools missing");
        }
        missing.is_empty()
    }

    /// [`is_ready`](Self::is_ready) plus a successful remote health probe.
    /// Without a client this is the same as `is_ready`.
    pub async fn is_ready_remote(&self) -> bool {
        if !self.is_ready() {
            return false;
        }
        match &self.client {
            Some(client) => client.health().is_healthy().await,
            None => true,
        }
    }
}
