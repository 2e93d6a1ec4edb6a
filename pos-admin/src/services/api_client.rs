use crate::config::ApiSettings;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use service_core::observability::TracedClientExt;
use std::time::Duration;

/// HTTP client for the remote POS API.
pub struct ApiClient {
    client: Client,
    settings: ApiSettings,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        self.settings.url.trim_end_matches('/')
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Send a POST request with trace context propagation.
    pub async fn post(&self, path: &str, body: serde_json::Value) -> Result<reqwest::Response> {
        let url = self.url(path);

        let response = self
            .client
            .traced_post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                anyhow::anyhow!("HTTP request failed: {}", e)
            })?;

        Ok(response)
    }

    /// Send a GET request with a bearer token and query parameters.
    pub async fn get_with_auth<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        access_token: &str,
        query: &Q,
    ) -> Result<reqwest::Response> {
        let url = self.url(path);

        let response = self
            .client
            .traced_get(&url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GET request to {}: {}", url, e);
                anyhow::anyhow!("HTTP request failed: {}", e)
            })?;

        Ok(response)
    }
}
