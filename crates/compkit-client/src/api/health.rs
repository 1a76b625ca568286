//! Health API.

use crate::client::ComponentClient;
use crate::error::{Error, Result};
use crate::types::HealthResponse;

/// Health API client.
pub struct HealthApi {
    client: ComponentClient,
}

impl HealthApi {
    pub(crate) fn new(client: ComponentClient) -> Self {
        Self { client }
    }

    /// Check the remote health endpoint.
    pub async fn check(&self) -> Result<HealthResponse> {
        let inner = self.client.inner();
        let url = self.client.url("health")?;

        let mut request = inner.http.get(url);
        if let Some(timeout) = inner.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        if response.status().is_success() {
            self.client.handle_response(response).await
        } else {
            Err(Error::Api {
                status: response.status().as_u16(),
                message: "Health check failed".to_string(),
            })
        }
    }

    /// Simple connectivity check - returns true if the API is reachable.
    pub async fn is_healthy(&self) -> bool {
        match self.check().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "component API health check failed");
                false
            }
        }
    }
}
