//! `generate_code`: code that uses the component library.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Value, json};

use compkit_client::{ComponentApi, GenerateQuery};

use super::params::{DEFAULT_FRAMEWORK, GenerateParams};
use super::{Tool, ToolOutcome, finish, rejected};

pub(super) const NAME: &str = "generate_code";

const HINTS: &[&str] = &[
    "Simplify the description or split it into smaller pieces",
    "Use recommend_components to choose components first, then pass them in 'components'",
    "Check that the framework is one the library supports",
];

/// Generates example code built from library components.
pub struct GenerateCodeTool {
    api: Arc<dyn ComponentApi>,
}

impl GenerateCodeTool {
    pub fn new(api: Arc<dyn ComponentApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GenerateCodeTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Generate ready-to-use code for a described piece of UI, built from library components."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "What the code should render or do"
                },
                "components": {
                    "type": "string",
                    "description": "Comma separated component names to build with, e.g. \"Form,Input,Button\""
                },
                "framework": {
                    "type": "string",
                    "default": DEFAULT_FRAMEWORK,
                    "description": "Target framework"
                },
                "typescript": {
                    "type": "boolean",
                    "default": true,
                    "description": "Emit TypeScript instead of JavaScript"
                },
                "include_styling": {
                    "type": "boolean",
                    "default": true,
                    "description": "Include styling in the generated code"
                }
            },
            "required": ["description"]
        })
    }

    async fn execute(&self, args: Value) -> ToolOutcome {
        let params = match GenerateParams::try_from(args) {
            Ok(p) => p,
            Err(e) => return rejected(NAME, e, HINTS),
        };

        tracing::info!(
            tool = NAME,
            description_len = params.description.len(),
            components = ?params.components,
            framework = %params.framework,
            typescript = params.typescript,
            "generating code"
        );
        let started = Instant::now();
        let result = self.api.generate(&GenerateQuery::from(params)).await;
        finish(NAME, started, result, HINTS)
    }
}
