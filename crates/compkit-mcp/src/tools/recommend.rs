//! `recommend_components`: suggestions for a use case.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Value, json};

use compkit_client::{ComponentApi, RecommendQuery};

use super::params::{DEFAULT_FRAMEWORK, DEFAULT_RECOMMEND_LIMIT, MAX_RECOMMEND_LIMIT, RecommendParams};
use super::{Tool, ToolOutcome, finish, rejected};

pub(super) const NAME: &str = "recommend_components";

const HINTS: &[&str] = &[
    "Describe the use case in more detail, e.g. \"multi-step checkout form with address lookup\"",
    "Try a different complexity level (simple, medium, complex)",
];

/// Recommends components that fit a described use case.
pub struct RecommendComponentsTool {
    api: Arc<dyn ComponentApi>,
}

impl RecommendComponentsTool {
    pub fn new(api: Arc<dyn ComponentApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for RecommendComponentsTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Recommend components for a use case, e.g. \"admin dashboard\" or \"signup flow\", ranked by fit."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "use_case": {
                    "type": "string",
                    "description": "What you are building"
                },
                "complexity": {
                    "type": "string",
                    "enum": ["simple", "medium", "complex"],
                    "default": "medium",
                    "description": "How involved the solution may be"
                },
                "framework": {
                    "type": "string",
                    "default": DEFAULT_FRAMEWORK,
                    "description": "Target framework"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": MAX_RECOMMEND_LIMIT,
                    "default": DEFAULT_RECOMMEND_LIMIT,
                    "description": "Maximum number of recommendations"
                }
            },
            "required": ["use_case"]
        })
    }

    async fn execute(&self, args: Value) -> ToolOutcome {
        let params = match RecommendParams::try_from(args) {
            Ok(p) => p,
            Err(e) => return rejected(NAME, e, HINTS),
        };

        tracing::info!(
            tool = NAME,
            use_case = %params.use_case,
            complexity = %params.complexity,
            framework = %params.framework,
            limit = params.limit,
            "recommending components"
        );
        let started = Instant::now();
        let result = self.api.recommend(&RecommendQuery::from(params)).await;
        finish(NAME, started, result, HINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{Recorded, StubApi};
    use compkit_client::Complexity;

    #[tokio::test]
    async fn test_recommend_applies_defaults() {
        let api = StubApi::returning(json!({"recommendations": ["Form", "Input"]}));
        let tool = RecommendComponentsTool::new(api.clone());

        let outcome = tool.execute(json!({"use_case": "signup flow"})).await;
        assert_eq!(
            outcome,
            ToolOutcome::Success(json!({"recommendations": ["Form", "Input"]}))
        );
        assert_eq!(
            api.last_call(),
            Some(Recorded::Recommend(RecommendQuery {
                use_case: "signup flow".to_string(),
                complexity: Complexity::Medium,
                framework: "react".to_string(),
                limit: 5,
            }))
        );
    }

    #[tokio::test]
    async fn test_recommend_rejects_unknown_complexity() {
        let api = StubApi::returning(json!({}));
        let tool = RecommendComponentsTool::new(api.clone());

        let outcome = tool
            .execute(json!({"use_case": "signup flow", "complexity": "galaxy-brain"}))
            .await;
        let failure = outcome.as_failure().unwrap();
        assert!(failure.error.contains("galaxy-brain"));
        assert!(api.last_call().is_none());
    }
}
