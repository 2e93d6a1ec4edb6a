use crate::models::{AuthSession, ShopRecord};
use crate::onboarding::ShopDirectory;
use crate::services::api_client::ApiClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Shop listing backed by `GET /shops` on the remote API.
pub struct ShopClient {
    api: Arc<ApiClient>,
}

impl ShopClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShopDirectory for ShopClient {
    async fn list_shops(&self, session: &AuthSession) -> Result<Vec<ShopRecord>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(business_id) = session.business_id {
            query.push(("businessId", business_id.to_string()));
        }

        let response = self
            .api
            .get_with_auth("/shops", &session.access_token, &query)
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Shop listing returned {}", status);
        }

        response
            .json::<Vec<ShopRecord>>()
            .await
            .context("Failed to decode shop listing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Role;
    use crate::config::ApiSettings;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ShopClient {
        let api = ApiClient::new(ApiSettings {
            url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap();
        ShopClient::new(Arc::new(api))
    }

    fn owner() -> AuthSession {
        AuthSession::new("owner-1", "owner@shop.test", Role::BusinessOwner)
            .with_business(5)
            .with_access_token("tok-123")
    }

    #[tokio::test]
    async fn test_lists_shops_for_business() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shops"))
            .and(query_param("businessId", "5"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Main Street", "businessId": 5, "currency": "USD"},
                {"id": 2}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let shops = client(&server).list_shops(&owner()).await.unwrap();
        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].name.as_deref(), Some("Main Street"));
    }

    #[tokio::test]
    async fn test_error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shops"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client(&server).list_shops(&owner()).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shops"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(client(&server).list_shops(&owner()).await.is_err());
    }
}
