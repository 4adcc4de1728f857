use std::time::Duration;

use kestrel_core::resource::Resource;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ResourceClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned error {0}: {1}")]
    Status(StatusCode, String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ResourceClientError>;

/// Connection parameters for [`ResourceClient`], supplied once by the
/// composition root.
#[derive(Clone, Debug)]
pub struct ResourceClientConfig {
    /// Root of the resource API, e.g. `https://example.com/api`.
    pub base_url: String,
    /// Path segment of the collection route, e.g. `projects`.
    pub collection: String,
    /// Optional bearer token attached to every request.
    pub token: Option<String>,
    /// Per-request timeout. `None` inherits the transport default.
    pub timeout: Option<Duration>,
}

/// Read-only client for a resource collection endpoint.
///
/// Every call is a single request/response; there are no retries and no
/// caching. Failures come back as typed errors so callers can tell an
/// empty collection from a failed fetch.
#[derive(Clone)]
pub struct ResourceClient {
    config: ResourceClientConfig,
    client: Client,
}

impl ResourceClient {
    pub fn new(config: ResourceClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    fn auth_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.config.token {
            builder.header("Authorization", format!("Bearer {token}"))
        } else {
            builder
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    /// Fetches every resource in the collection.
    pub async fn fetch_collection(&self) -> Result<Vec<Resource>> {
        let url = self.collection_url();
        let response = self.auth_request(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(%status, %url, "Resource collection fetch failed");
            return Err(ResourceClientError::Status(status, text));
        }

        response.json().await.map_err(|e| {
            warn!(%url, "Failed to decode resource collection: {e}");
            ResourceClientError::Decode(format!("Failed to parse resource list: {e}"))
        })
    }

    /// Fetches one resource by id. A 404 from the endpoint means the
    /// resource is absent, not that the call failed.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<Resource>> {
        let url = format!("{}/{id}", self.collection_url());
        let response = self.auth_request(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(%status, %url, "Resource fetch failed");
            return Err(ResourceClientError::Status(status, text));
        }

        let resource: Resource = response.json().await.map_err(|e| {
            warn!(%url, "Failed to decode resource: {e}");
            ResourceClientError::Decode(format!("Failed to parse resource: {e}"))
        })?;

        Ok(Some(resource))
    }
}
