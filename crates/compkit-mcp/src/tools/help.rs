//! `get_help`: general guidance about the library.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Value, json};

use compkit_client::{ComponentApi, HelpQuery};

use super::params::HelpParams;
use super::{Tool, ToolOutcome, finish, rejected};

pub(super) const NAME: &str = "get_help";

const HINTS: &[&str] = &[
    "Try a broader topic such as \"getting-started\" or \"theming\"",
    "Use search_components to look up a specific component",
];

/// Answers general questions about installing and using the library.
pub struct GetHelpTool {
    api: Arc<dyn ComponentApi>,
}

impl GetHelpTool {
    pub fn new(api: Arc<dyn ComponentApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetHelpTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get help with the component library: installation, theming, state management and available tools. Call without arguments for an overview."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Help topic, e.g. \"getting-started\", \"theming\", \"forms\""
                },
                "question": {
                    "type": "string",
                    "description": "A specific question to answer"
                }
            }
        })
    }

    async fn execute(&self, args: Value) -> ToolOutcome {
        let params = match HelpParams::try_from(args) {
            Ok(p) => p,
            Err(e) => return rejected(NAME, e, HINTS),
        };

        tracing::info!(tool = NAME, topic = ?params.topic, "fetching help");
        let started = Instant::now();
        let result = self.api.help(&HelpQuery::from(params)).await;
        finish(NAME, started, result, HINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{Recorded, StubApi};

    #[tokio::test]
    async fn test_help_without_arguments() {
        let api = StubApi::returning(json!({"topics": ["getting-started"]}));
        let tool = GetHelpTool::new(api.clone());

        let outcome = tool.execute(Value::Null).await;
        assert_eq!(
            outcome,
            ToolOutcome::Success(json!({"topics": ["getting-started"]}))
        );
        assert_eq!(api.last_call(), Some(Recorded::Help(HelpQuery::default())));
    }

    #[tokio::test]
    async fn test_help_with_topic() {
        let api = StubApi::returning(json!({}));
        let tool = GetHelpTool::new(api.clone());

        tool.execute(json!({"topic": "theming", "question": "dark mode?"}))
            .await;
        assert_eq!(
            api.last_call(),
            Some(Recorded::Help(HelpQuery {
                topic: Some("theming".to_string()),
                question: Some("dark mode?".to_string()),
            }))
        );
    }
}
