//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use crate::api::HealthApi;
use crate::error::{Error, ErrorResponse, Result};

/// Component API client.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use compkit_client::{ComponentApi, ComponentClient, SearchQuery};
///
/// # async fn example() -> compkit_client::Result<()> {
/// let client = ComponentClient::builder()
///     .base_url("http://localhost:3000/api/mcp")
///     .build()?;
///
/// let results = client
///     .search(&SearchQuery {
///         query: "button".to_string(),
///         category: None,
///         limit: 10,
///     })
///     .await?;
/// println!("{results}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ComponentClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL, always ending in `/`.
    pub(crate) base_url: Url,
    /// Per-request timeout; `None` waits indefinitely.
    pub(crate) timeout: Option<Duration>,
}

impl std::fmt::Debug for ComponentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl ComponentClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get access to the inner client state (for API implementations).
    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }

    /// Access the health API.
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    /// Build a URL for an endpoint relative to the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request with query parameters and decode the JSON body.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(url = %url, "component API request");

        let mut request = self.inner.http.get(url).query(query);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        // Read the body first so malformed JSON surfaces as a decode error
        // rather than being folded into reqwest's transport error.
        let body = response.bytes().await?;
        tracing::trace!(bytes = body.len(), "component API response");
        Ok(serde_json::from_slice(&body)?)
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("error")
            ),
        };

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Builder for creating a [`ComponentClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the component API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a bearer token sent with every request.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set a per-request timeout. Requests wait indefinitely by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ComponentClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL so relative joins keep the full path
        let mut base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("'{}' cannot be a base URL", base_url)));
        }
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::Config("Invalid auth token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("compkit-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(ComponentClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_builder_requires_base_url() {
        let err = ClientBuilder::new().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_builder_rejects_garbage_url() {
        let err = ClientBuilder::new().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:3000/api/mcp")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/api/mcp/");

        let client = ClientBuilder::new()
            .base_url("http://localhost:3000/api/mcp/")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/api/mcp/");
    }

    #[test]
    fn test_url_building_keeps_base_path() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:3000/api/mcp")
            .build()
            .unwrap();

        let url = client.url("search").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/mcp/search");

        let url = client.url("/docs").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/mcp/docs");
    }

    #[test]
    fn test_timeout_defaults_to_none() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:3000")
            .build()
            .unwrap();
        assert!(client.inner().timeout.is_none());

        let client = ClientBuilder::new()
            .base_url("http://localhost:3000")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.inner().timeout, Some(Duration::from_secs(5)));
    }
}
