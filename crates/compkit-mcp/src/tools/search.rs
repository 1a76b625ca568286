//! `search_components`: free-text search over the component catalog.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Value, json};

use compkit_client::{ComponentApi, SearchQuery};

use super::params::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, SearchParams};
use super::{Tool, ToolOutcome, finish, rejected};

pub(super) const NAME: &str = "search_components";

const HINTS: &[&str] = &[
    "Try a broader or shorter search query",
    "Remove the category filter to search every component",
    "Use get_help to see which categories exist",
];

/// Searches the component library by name, purpose or keyword.
pub struct SearchComponentsTool {
    api: Arc<dyn ComponentApi>,
}

impl SearchComponentsTool {
    pub fn new(api: Arc<dyn ComponentApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for SearchComponentsTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Search the component library by name, purpose or keyword. Returns matching components with a short summary of each."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search text, e.g. \"button\" or \"date picker\""
                },
                "category": {
                    "type": "string",
                    "description": "Only return components in this category, e.g. \"forms\" or \"navigation\""
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": MAX_SEARCH_LIMIT,
                    "default": DEFAULT_SEARCH_LIMIT,
                    "description": "Maximum number of results"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> ToolOutcome {
        let params = match SearchParams::try_from(args) {
            Ok(p) => p,
            Err(e) => return rejected(NAME, e, HINTS),
        };

        tracing::info!(
            tool = NAME,
            query = %params.query,
            category = ?params.category,
            limit = params.limit,
            "searching components"
        );
        let started = Instant::now();
        let result = self.api.search(&SearchQuery::from(params)).await;
        finish(NAME, started, result, HINTS)
    }
}
