//! Tool results and failure normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use compkit_client::{Error as ClientError, ErrorKind};

use super::params::ParameterValidationError;

/// What a tool invocation returns to the host.
///
/// Serializes as the bare API payload on success, or as
/// `{"success": false, "error": ..., "suggestions": [...]}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    /// Payload from the component API, unchanged.
    Success(Value),
    /// Normalized failure.
    Failure(ToolFailure),
}

impl ToolOutcome {
    /// Check if this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Check if this outcome is successful.
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// Get the failure, if any.
    pub fn as_failure(&self) -> Option<&ToolFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success(_) => None,
        }
    }

    /// Convert to a JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Success(payload) => payload,
            Self::Failure(failure) => serde_json::to_value(failure).unwrap_or(Value::Null),
        }
    }

    /// Render for a text content block.
    pub fn to_text(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| self.clone().into_value().to_string())
    }
}

/// Uniform failure payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFailure {
    /// Always `false`.
    pub success: bool,
    /// What went wrong.
    pub error: String,
    /// Remediation hints, never empty.
    pub suggestions: Vec<String>,
}

const FALLBACK_SUGGESTION: &str = "Try the request again with different arguments";

impl ToolFailure {
    /// Create a failure. An empty suggestion list gets a generic entry.
    pub fn new(error: impl Into<String>, mut suggestions: Vec<String>) -> Self {
        if suggestions.is_empty() {
            suggestions.push(FALLBACK_SUGGESTION.to_string());
        }
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "unknown error".to_string();
        }
        Self {
            success: false,
            error,
            suggestions,
        }
    }

    /// Normalize a client error, adding remediation for its kind followed by
    /// the tool's own hints.
    pub fn from_client_error(err: &ClientError, tool_hints: &[&str]) -> Self {
        let mut suggestions: Vec<String> = remediation_for(err)
            .iter()
            .map(|s| s.to_string())
            .collect();
        suggestions.extend(tool_hints.iter().map(|s| s.to_string()));
        Self::new(err.to_string(), suggestions)
    }

    /// Normalize an argument validation error.
    pub fn from_validation(err: &ParameterValidationError, tool_hints: &[&str]) -> Self {
        let mut suggestions = vec![match err.parameter_name() {
            Some(name) => format!(
                "Check the '{}' argument against the tool's input schema",
                name
            ),
            None => "Check the arguments against the tool's input schema".to_string(),
        }];
        suggestions.extend(tool_hints.iter().map(|s| s.to_string()));
        Self::new(err.to_string(), suggestions)
    }
}

fn remediation_for(err: &ClientError) -> &'static [&'static str] {
    match err.kind() {
        ErrorKind::Decode => &[
            "The component API returned something other than JSON; check that COMPKIT_API_URL points at the component API",
        ],
        ErrorKind::Config => {
            &["Fix api.base_url in the compkit configuration or set COMPKIT_API_URL"]
        }
        ErrorKind::Transport => match err.status() {
            None => &[
                "Check your network connection",
                "Verify the component API is running and COMPKIT_API_URL is correct",
            ],
            Some(404) => &["The requested item was not found on the component API"],
            Some(401) | Some(403) => &["Set COMPKIT_API_TOKEN to a valid API token"],
            Some(429) => {
                &["The component API is rate limiting requests; wait a moment before retrying"]
            }
            Some(status) if status >= 500 => {
                &["The component API reported a server error; try again later"]
            }
            Some(_) => &["The component API rejected the request; check the arguments"],
        },
    }
}
