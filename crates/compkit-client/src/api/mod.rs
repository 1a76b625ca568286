//! API endpoint implementations.

mod components;
mod health;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{DocsQuery, GenerateQuery, HelpQuery, RecommendQuery, SearchQuery};

pub use health::HealthApi;

/// The component API capabilities, one method per endpoint.
///
/// [`ComponentClient`](crate::ComponentClient) implements this over HTTP.
/// Tool code depends on the trait so tests can swap in a stub.
#[async_trait]
pub trait ComponentApi: Send + Sync {
    /// Search the component catalog.
    async fn search(&self, query: &SearchQuery) -> Result<Value>;

    /// Fetch documentation for a single component.
    async fn docs(&self, query: &DocsQuery) -> Result<Value>;

    /// Recommend components for a use case.
    async fn recommend(&self, query: &RecommendQuery) -> Result<Value>;

    /// Generate code that uses the library.
    async fn generate(&self, query: &GenerateQuery) -> Result<Value>;

    /// Get general help about the library.
    async fn help(&self, query: &HelpQuery) -> Result<Value>;
}
