//! `get_component_docs`: documentation for one component.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Value, json};

use compkit_client::{ComponentApi, DocsQuery};

use super::params::DocsParams;
use super::{Tool, ToolOutcome, finish, rejected};

pub(super) const NAME: &str = "get_component_docs";

const HINTS: &[&str] = &[
    "Check the component name spelling, e.g. \"Button\" or \"Modal\"",
    "Use search_components to find the exact component name",
];

/// Fetches props, examples and styling notes for a component.
pub struct GetComponentDocsTool {
    api: Arc<dyn ComponentApi>,
}

impl GetComponentDocsTool {
    pub fn new(api: Arc<dyn ComponentApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetComponentDocsTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get documentation for a component: its props, usage examples and, optionally, styling guidance."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "component_name": {
                    "type": "string",
                    "description": "Component name, e.g. \"Modal\""
                },
                "include_examples": {
                    "type": "boolean",
                    "default": true,
                    "description": "Include usage examples"
                },
                "include_props": {
                    "type": "boolean",
                    "default": true,
                    "description": "Include the props reference"
                },
                "include_styling": {
                    "type": "boolean",
                    "default": false,
                    "description": "Include styling and theming notes"
                }
            },
            "required": ["component_name"]
        })
    }

    async fn execute(&self, args: Value) -> ToolOutcome {
        let params = match DocsParams::try_from(args) {
            Ok(p) => p,
            Err(e) => return rejected(NAME, e, HINTS),
        };

        tracing::info!(
            tool = NAME,
            component = %params.component_name,
            include_examples = params.include_examples,
            include_props = params.include_props,
            include_styling = params.include_styling,
            "fetching component docs"
        );
        let started = Instant::now();
        let result = self.api.docs(&DocsQuery::from(params)).await;
        finish(NAME, started, result, HINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{Recorded, StubApi};

    #[tokio::test]
    async fn test_docs_applies_defaults() {
        let api = StubApi::returning(json!({"name": "Modal"}));
        let tool = GetComponentDocsTool::new(api.clone());

        let outcome = tool.execute(json!({"component_name": "Modal"})).await;
        assert!(outcome.is_success());
        assert_eq!(
            api.last_call(),
            Some(Recorded::Docs(DocsQuery {
                component_name: "Modal".to_string(),
                include_examples: true,
                include_props: true,
                include_styling: false,
            }))
        );
    }

    #[tokio::test]
    async fn test_docs_explicit_flags() {
        let api = StubApi::returning(json!({}));
        let tool = GetComponentDocsTool::new(api.clone());

        tool.execute(json!({
            "component_name": "Navbar",
            "include_examples": false,
            "include_styling": true
        }))
        .await;
        let Some(Recorded::Docs(query)) = api.last_call() else {
            panic!("expected a docs call");
        };
        assert!(!query.include_examples);
        assert!(query.include_props);
        assert!(query.include_styling);
    }

    #[tokio::test]
    async fn test_docs_missing_name() {
        let api = StubApi::returning(json!({}));
        let tool = GetComponentDocsTool::new(api.clone());

        let outcome = tool.execute(json!({"component_name": "   "})).await;
        assert!(outcome.is_failure());
        assert!(api.last_call().is_none());
    }
}
