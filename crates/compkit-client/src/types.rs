//! Query types for the component API.
//!
//! Each struct serializes to the query string of one endpoint. `None`
//! fields are left out of the request entirely.

use serde::{Deserialize, Serialize};

/// How involved a recommended component setup may be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl Complexity {
    /// Wire name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    /// Free-text search.
    pub query: String,
    /// Restrict to a component category (e.g. "forms", "navigation").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Maximum results.
    pub limit: u32,
}

/// `GET docs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocsQuery {
    pub component_name: String,
    pub include_examples: bool,
    pub include_props: bool,
    pub include_styling: bool,
}

/// `GET recommend`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendQuery {
    /// What the caller is trying to build.
    pub use_case: String,
    pub complexity: Complexity,
    pub framework: String,
    pub limit: u32,
}

/// `GET generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateQuery {
    /// Natural-language description of the UI to generate.
    pub description: String,
    /// Comma separated component names to build with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    pub framework: String,
    pub typescript: bool,
    pub include_styling: bool,
}

/// `GET help`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HelpQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// Body of the remote health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    #[serde(default)]
    pub status: String,
    /// Service version, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_wire_names() {
        assert_eq!(
            serde_json::to_string(&Complexity::Complex).unwrap(),
            "\"complex\""
        );
        let parsed: Complexity = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(parsed, Complexity::Simple);
        assert_eq!(Complexity::default(), Complexity::Medium);
    }

    #[test]
    fn test_search_query_skips_missing_category() {
        let query = SearchQuery {
            query: "button".to_string(),
            category: None,
            limit: 10,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(json["limit"], 10);
    }

    #[test]
    fn test_health_response_tolerates_sparse_body() {
        let health: HealthResponse = serde_json::from_str("{}").unwrap();
        assert!(health.status.is_empty());
        assert!(health.version.is_none());
    }
}
