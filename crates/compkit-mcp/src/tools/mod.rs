//! Tool framework and the component tools.
//!
//! Each tool wraps one [`ComponentApi`] method. Invocations never return an
//! error to the host: API and argument failures become a
//! [`ToolOutcome::Failure`] with remediation suggestions.
//!
//! | Tool | API method |
//! |---|---|
//! | `search_components` | [`ComponentApi::search`] |
//! | `get_component_docs` | [`ComponentApi::docs`] |
//! | `recommend_components` | [`ComponentApi::recommend`] |
//! | `generate_code` | [`ComponentApi::generate`] |
//! | `get_help` | [`ComponentApi::help`] |

mod docs;
mod generate;
mod help;
mod outcome;
pub mod params;
mod recommend;
mod search;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;

use compkit_client::ComponentApi;

use crate::error::{McpError, Result};
use crate::protocol::ToolInfo;

pub use docs::GetComponentDocsTool;
pub use generate::GenerateCodeTool;
pub use help::GetHelpTool;
pub use outcome::{ToolFailure, ToolOutcome};
pub use params::{
    DocsParams, GenerateParams, HelpParams, ParameterValidationError, RecommendParams,
    SearchParams,
};
pub use recommend::RecommendComponentsTool;
pub use search::SearchComponentsTool;

/// Names of the tools every server instance must expose.
pub const COMPONENT_TOOLS: [&str; 5] = [
    search::NAME,
    docs::NAME,
    recommend::NAME,
    generate::NAME,
    help::NAME,
];

// ─────────────────────────────────────────────────────────────────────────────
// Tool Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A named operation exposed to the MCP host.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the unique name of this tool.
    fn name(&self) -> &str;

    /// Get a human-readable description of what this tool does.
    fn description(&self) -> &str;

    /// Get the JSON Schema for this tool's arguments.
    fn parameters(&self) -> Value;

    /// Run the tool. Always produces an outcome; failures are data.
    async fn execute(&self, args: Value) -> ToolOutcome;
}

/// Turn an API result into an outcome, logging completion or failure.
pub(crate) fn finish(
    tool: &str,
    started: Instant,
    result: compkit_client::Result<Value>,
    hints: &[&str],
) -> ToolOutcome {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(payload) => {
            tracing::info!(tool, elapsed_ms, "tool call completed");
            ToolOutcome::Success(payload)
        }
        Err(e) => {
            tracing::warn!(tool, elapsed_ms, kind = ?e.kind(), error = %e, "tool call failed");
            ToolOutcome::Failure(ToolFailure::from_client_error(&e, hints))
        }
    }
}

/// Outcome for arguments that failed validation. No request is made.
pub(crate) fn rejected(tool: &str, err: ParameterValidationError, hints: &[&str]) -> ToolOutcome {
    tracing::warn!(tool, error = %err, "tool arguments rejected");
    ToolOutcome::Failure(ToolFailure::from_validation(&err, hints))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered set of tools, looked up by name.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the five component tools, all sharing `api`.
    pub fn with_component_tools(api: Arc<dyn ComponentApi>) -> Self {
        let mut registry = Self::new();
        registry.register(SearchComponentsTool::new(api.clone()));
        registry.register(GetComponentDocsTool::new(api.clone()));
        registry.register(RecommendComponentsTool::new(api.clone()));
        registry.register(GenerateCodeTool::new(api.clone()));
        registry.register(GetHelpTool::new(api));
        registry
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it is replaced in place.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let tool: Arc<dyn Tool> = Arc::new(tool);
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(slot) => *slot = tool,
            None => self.tools.push(tool),
        }
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// Get all tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool definitions for `tools/list`.
    pub fn definitions(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: Some(tool.description().to_string()),
                input_schema: tool.parameters(),
            })
            .collect()
    }

    /// Invoke a tool by name.
    ///
    /// Only an unknown name is an error; everything else is an outcome.
    pub async fn call(&self, name: &str, args: Value) -> Result<ToolOutcome> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::UnknownTool(name.to_string()))?;
        Ok(tool.execute(args).await)
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Stub API shared by the tool tests.

    use super::*;
    use compkit_client::{
        DocsQuery, Error as ClientError, GenerateQuery, HelpQuery, RecommendQuery, SearchQuery,
    };
    use parking_lot::Mutex;

    /// A call the stub received.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Recorded {
        Search(SearchQuery),
        Docs(DocsQuery),
        Recommend(RecommendQuery),
        Generate(GenerateQuery),
        Help(HelpQuery),
    }

    /// Returns a fixed payload, or fails with a transport error.
    pub struct StubApi {
        payload: Value,
        fail_with: Option<String>,
        pub calls: Mutex<Vec<Recorded>>,
    }

    impl StubApi {
        pub fn returning(payload: Value) -> Arc<Self> {
            Arc::new(Self {
                payload,
                fail_with: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                payload: Value::Null,
                fail_with: Some(message.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn last_call(&self) -> Option<Recorded> {
            self.calls.lock().last().cloned()
        }

        fn respond(&self, call: Recorded) -> compkit_client::Result<Value> {
            self.calls.lock().push(call);
            match &self.fail_with {
                Some(message) => Err(ClientError::transport(message.clone())),
                None => Ok(self.payload.clone()),
            }
        }
    }

    #[async_trait]
    impl ComponentApi for StubApi {
        async fn search(&self, query: &SearchQuery) -> compkit_client::Result<Value> {
            self.respond(Recorded::Search(query.clone()))
        }

        async fn docs(&self, query: &DocsQuery) -> compkit_client::Result<Value> {
            self.respond(Recorded::Docs(query.clone()))
        }

        async fn recommend(&self, query: &RecommendQuery) -> compkit_client::Result<Value> {
            self.respond(Recorded::Recommend(query.clone()))
        }

        async fn generate(&self, query: &GenerateQuery) -> compkit_client::Result<Value> {
            self.respond(Recorded::Generate(query.clone()))
        }

        async fn help(&self, query: &HelpQuery) -> compkit_client::Result<Value> {
            self.respond(Recorded::Help(query.clone()))
        }
    }
}
