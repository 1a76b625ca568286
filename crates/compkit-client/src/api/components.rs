//! HTTP implementation of the component endpoints.

use async_trait::async_trait;
use serde_json::Value;

use super::ComponentApi;
use crate::client::ComponentClient;
use crate::error::Result;
use crate::types::{DocsQuery, GenerateQuery, HelpQuery, RecommendQuery, SearchQuery};

#[async_trait]
impl ComponentApi for ComponentClient {
    async fn search(&self, query: &SearchQuery) -> Result<Value> {
        self.get_with_query("search", query).await
    }

    async fn docs(&self, query: &DocsQuery) -> Result<Value> {
        self.get_with_query("docs", query).await
    }

    async fn recommend(&self, query: &RecommendQuery) -> Result<Value> {
        self.get_with_query("recommend", query).await
    }

    async fn generate(&self, query: &GenerateQuery) -> Result<Value> {
        self.get_with_query("generate", query).await
    }

    async fn help(&self, query: &HelpQuery) -> Result<Value> {
        self.get_with_query("help", query).await
    }
}
