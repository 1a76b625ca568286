//! Typed tool parameters.
//!
//! Hosts send a loose JSON argument bag. Each tool turns it into one of the
//! structs below, filling in defaults for omitted fields. `null` and blank
//! strings count as omitted.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use compkit_client::{
    Complexity, DocsQuery, GenerateQuery, HelpQuery, RecommendQuery, SearchQuery,
};

// ─────────────────────────────────────────────────────────────────────────────
// Parameter Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Error type for tool parameter validation failures.
///
/// Messages are written for the host model: they say what is wrong and how to
/// fix it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterValidationError {
    /// A required parameter is missing or blank.
    #[error("missing required parameter '{name}': {hint}")]
    MissingRequired {
        /// The parameter name.
        name: &'static str,
        /// Hint for the host on how to fix.
        hint: &'static str,
    },

    /// A parameter has an invalid type.
    #[error("invalid type for '{name}': expected {expected}, got {actual}")]
    InvalidType {
        /// The parameter name.
        name: &'static str,
        /// The expected type.
        expected: &'static str,
        /// The actual type found.
        actual: String,
    },

    /// A parameter value is out of range.
    #[error("'{name}' value {value} is out of range: {constraint}")]
    OutOfRange {
        /// The parameter name.
        name: &'static str,
        /// The actual value as string.
        value: String,
        /// Description of the valid range.
        constraint: String,
    },

    /// The argument bag did not match the parameter shape.
    #[error("invalid arguments: {0}")]
    Malformed(String),
}

impl ParameterValidationError {
    /// Create a missing required parameter error.
    pub fn missing(name: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { name, hint }
    }

    /// Create an out of range error.
    pub fn out_of_range(
        name: &'static str,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            name,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Get the parameter name associated with this error, if known.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequired { name, .. }
            | Self::InvalidType { name, .. }
            | Self::OutOfRange { name, .. } => Some(*name),
            Self::Malformed(_) => None,
        }
    }
}

/// Result type for parameter validation.
pub type ParamResult<T> = std::result::Result<T, ParameterValidationError>;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Deserialize an argument bag, dropping `null` and blank-string entries so
/// serde defaults apply to them.
fn parse_args<T: DeserializeOwned>(args: Value) -> ParamResult<T> {
    let map = match args {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(ParameterValidationError::InvalidType {
                name: "arguments",
                expected: "object",
                actual: json_type_name(&other).to_string(),
            });
        }
    };

    let map: Map<String, Value> = map
        .into_iter()
        .filter(|(_, v)| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
        .collect();

    serde_json::from_value(Value::Object(map))
        .map_err(|e| ParameterValidationError::Malformed(e.to_string()))
}

fn require(value: &str, name: &'static str, hint: &'static str) -> ParamResult<()> {
    if value.trim().is_empty() {
        return Err(ParameterValidationError::missing(name, hint));
    }
    Ok(())
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> ParamResult<()> {
    if !(min..=max).contains(&value) {
        return Err(ParameterValidationError::out_of_range(
            name,
            value,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Default result limit for `search_components`.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
/// Largest result limit `search_components` accepts.
pub const MAX_SEARCH_LIMIT: u32 = 100;
/// Default result limit for `recommend_components`.
pub const DEFAULT_RECOMMEND_LIMIT: u32 = 5;
/// Largest result limit `recommend_components` accepts.
pub const MAX_RECOMMEND_LIMIT: u32 = 50;
/// Framework assumed when none is given.
pub const DEFAULT_FRAMEWORK: &str = "react";

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

fn default_recommend_limit() -> u32 {
    DEFAULT_RECOMMEND_LIMIT
}

fn default_framework() -> String {
    DEFAULT_FRAMEWORK.to_string()
}

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed Parameter Structs
// ─────────────────────────────────────────────────────────────────────────────

/// Validated parameters for `search_components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchParams {
    /// Search text.
    #[serde(default)]
    pub query: String,
    /// Optional category filter.
    #[serde(default)]
    pub category: Option<String>,
    /// Maximum results, default 10.
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

impl TryFrom<Value> for SearchParams {
    type Error = ParameterValidationError;

    fn try_from(args: Value) -> ParamResult<Self> {
        let params: Self = parse_args(args)?;
        require(
            &params.query,
            "query",
            "provide search text such as \"button\" or \"date picker\"",
        )?;
        check_range("limit", params.limit, 1, MAX_SEARCH_LIMIT)?;
        Ok(params)
    }
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        SearchQuery {
            query: params.query,
            category: params.category,
            limit: params.limit,
        }
    }
}

/// Validated parameters for `get_component_docs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocsParams {
    /// Component to document, e.g. "Modal".
    #[serde(default)]
    pub component_name: String,
    /// Include usage examples (default true).
    #[serde(default = "default_true")]
    pub include_examples: bool,
    /// Include the props table (default true).
    #[serde(default = "default_true")]
    pub include_props: bool,
    /// Include styling notes (default false).
    #[serde(default)]
    pub include_styling: bool,
}

impl TryFrom<Value> for DocsParams {
    type Error = ParameterValidationError;

    fn try_from(args: Value) -> ParamResult<Self> {
        let params: Self = parse_args(args)?;
        require(
            &params.component_name,
            "component_name",
            "provide the component name, e.g. \"Modal\"",
        )?;
        Ok(params)
    }
}

impl From<DocsParams> for DocsQuery {
    fn from(params: DocsParams) -> Self {
        DocsQuery {
            component_name: params.component_name,
            include_examples: params.include_examples,
            include_props: params.include_props,
            include_styling: params.include_styling,
        }
    }
}

/// Validated parameters for `recommend_components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendParams {
    /// What is being built.
    #[serde(default)]
    pub use_case: String,
    /// Default `medium`.
    #[serde(default)]
    pub complexity: Complexity,
    /// Default `react`.
    #[serde(default = "default_framework")]
    pub framework: String,
    /// Maximum recommendations, default 5.
    #[serde(default = "default_recommend_limit")]
    pub limit: u32,
}

impl TryFrom<Value> for RecommendParams {
    type Error = ParameterValidationError;

    fn try_from(args: Value) -> ParamResult<Self> {
        let params: Self = parse_args(args)?;
        require(
            &params.use_case,
            "use_case",
            "describe what you are building, e.g. \"checkout form\"",
        )?;
        check_range("limit", params.limit, 1, MAX_RECOMMEND_LIMIT)?;
        Ok(params)
    }
}

impl From<RecommendParams> for RecommendQuery {
    fn from(params: RecommendParams) -> Self {
        RecommendQuery {
            use_case: params.use_case,
            complexity: params.complexity,
            framework: params.framework,
            limit: params.limit,
        }
    }
}

/// Validated parameters for `generate_code`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateParams {
    /// What the generated code should do.
    #[serde(default)]
    pub description: String,
    /// Comma separated component names to use.
    #[serde(default)]
    pub components: Option<String>,
    #[serde(default = "default_framework")]
    pub framework: String,
    #[serde(default = "default_true")]
    pub typescript: bool,
    #[serde(default = "default_true")]
    pub include_styling: bool,
}

impl TryFrom<Value> for GenerateParams {
    type Error = ParameterValidationError;

    fn try_from(args: Value) -> ParamResult<Self> {
        let params: Self = parse_args(args)?;
        require(
            &params.description,
            "description",
            "describe the UI to generate, e.g. \"login form with remember me\"",
        )?;
        Ok(params)
    }
}

impl From<GenerateParams> for GenerateQuery {
    fn from(params: GenerateParams) -> Self {
        GenerateQuery {
            description: params.description,
            components: params.components,
            framework: params.framework,
            typescript: params.typescript,
            include_styling: params.include_styling,
        }
    }
}

/// Validated parameters for `get_help`. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HelpParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

impl TryFrom<Value> for HelpParams {
    type Error = ParameterValidationError;

    fn try_from(args: Value) -> ParamResult<Self> {
        parse_args(args)
    }
}

impl From<HelpParams> for HelpQuery {
    fn from(params: HelpParams) -> Self {
        HelpQuery {
            topic: params.topic,
            question: params.question,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_defaults() {
        let params = SearchParams::try_from(json!({"query": "button"})).unwrap();
        assert_eq!(params.query, "button");
        assert_eq!(params.category, None);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_search_explicit_values_win() {
        let params =
            SearchParams::try_from(json!({"query": "button", "category": "forms", "limit": 3}))
                .unwrap();
        assert_eq!(params.category.as_deref(), Some("forms"));
        assert_eq!(params.limit, 3);
    }

    #[test]
    fn test_null_and_blank_count_as_omitted() {
        let params =
            SearchParams::try_from(json!({"query": "card", "category": "  ", "limit": null}))
                .unwrap();
        assert_eq!(params.category, None);
        assert_eq!(params.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn test_search_missing_query() {
        let err = SearchParams::try_from(json!({})).unwrap_err();
        assert_eq!(err.parameter_name(), Some("query"));
        assert!(err.to_string().contains("missing required parameter 'query'"));

        let err = SearchParams::try_from(json!({"query": ""})).unwrap_err();
        assert!(matches!(
            err,
            ParameterValidationError::MissingRequired { name: "query", .. }
        ));
    }

    #[test]
    fn test_search_limit_range() {
        let err = SearchParams::try_from(json!({"query": "x", "limit": 0})).unwrap_err();
        assert!(matches!(err, ParameterValidationError::OutOfRange { .. }));

        let err = SearchParams::try_from(json!({"query": "x", "limit": 101})).unwrap_err();
        assert!(err.to_string().contains("between 1 and 100"));

        let err = SearchParams::try_from(json!({"query": "x", "limit": -1})).unwrap_err();
        assert!(matches!(err, ParameterValidationError::Malformed(_)));
    }

    #[test]
    fn test_arguments_must_be_object() {
        let err = SearchParams::try_from(json!(["button"])).unwrap_err();
        assert!(matches!(
            err,
            ParameterValidationError::InvalidType {
                name: "arguments",
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_field_type() {
        let err = DocsParams::try_from(json!({"component_name": "Modal", "include_props": "yes"}))
            .unwrap_err();
        assert!(matches!(err, ParameterValidationError::Malformed(_)));
    }

    #[test]
    fn test_docs_defaults() {
        let params = DocsParams::try_from(json!({"component_name": "Modal"})).unwrap();
        assert!(params.include_examples);
        assert!(params.include_props);
        assert!(!params.include_styling);
    }

    #[test]
    fn test_recommend_defaults_and_complexity() {
        let params = RecommendParams::try_from(json!({"use_case": "dashboard"})).unwrap();
        assert_eq!(params.complexity, Complexity::Medium);
        assert_eq!(params.framework, "react");
        assert_eq!(params.limit, DEFAULT_RECOMMEND_LIMIT);

        let params =
            RecommendParams::try_from(json!({"use_case": "dashboard", "complexity": "simple"}))
                .unwrap();
        assert_eq!(params.complexity, Complexity::Simple);

        let err =
            RecommendParams::try_from(json!({"use_case": "dashboard", "complexity": "extreme"}))
                .unwrap_err();
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn test_generate_defaults() {
        let params = GenerateParams::try_from(json!({"description": "login form"})).unwrap();
        assert_eq!(params.framework, "react");
        assert!(params.typescript);
        assert!(params.include_styling);
        assert!(params.components.is_none());

        let query = GenerateQuery::from(params);
        assert_eq!(query.description, "login form");
    }

    #[test]
    fn test_help_accepts_nothing() {
        assert_eq!(HelpParams::try_from(Value::Null).unwrap(), HelpParams::default());
        let params = HelpParams::try_from(json!({"topic": "theming"})).unwrap();
        assert_eq!(params.topic.as_deref(), Some("theming"));
    }
}
