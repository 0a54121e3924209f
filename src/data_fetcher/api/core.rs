use crate::config::{Config, normalize_api_domain};
use crate::constants::retry;
use crate::error::AppError;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use tracing::{instrument, warn};

use super::fetch_utils::fetch_json;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_content_url;

/// Source of CMS JSON. Every failure is reported as `None`.
pub trait ContentSource {
    fn get(&self, endpoint: &str) -> impl Future<Output = Option<Value>> + Send;
}

/// HTTP accessor for the CMS delivery API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl ApiClient {
    /// Builds an accessor from the configured domain and timeout. A domain
    /// without a scheme is reached over https.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(
            client,
            normalize_api_domain(&config.api_domain),
        ))
    }

    /// Builds an accessor around an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            max_retries: retry::MAX_ATTEMPTS,
        }
    }

    /// Overrides how many times transient failures are retried.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint on this API.
    pub fn url_for(&self, endpoint: &str) -> String {
        build_content_url(&self.base_url, endpoint)
    }

    /// Fetches an endpoint and returns the parsed JSON body, or the
    /// classified error.
    pub async fn try_get(&self, endpoint: &str) -> Result<Value, AppError> {
        let url = self.url_for(endpoint);
        fetch_json(&self.client, &url, self.max_retries).await
    }

    /// Fetches an endpoint, logging and swallowing any error.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get(&self, endpoint: &str) -> Option<Value> {
        match self.try_get(endpoint).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Request to {} failed: {}", endpoint, e);
                None
            }
        }
    }
}

impl ContentSource for ApiClient {
    async fn get(&self, endpoint: &str) -> Option<Value> {
        ApiClient::get(self, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::with_client(create_test_http_client(), server.uri()).with_max_retries(0)
    }

    #[tokio::test]
    async fn test_get_returns_json() {
        let mock_server = MockServer::start().await;
        let body = json!({"total": 1, "items": [{"id": "t1", "contentType": "team"}]});

        Mock::given(method("GET"))
            .and(path("/umbraco/delivery/api/v1/content"))
            .and(query_param("take", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let api = client_for(&mock_server);
        let result = api.get("/umbraco/delivery/api/v1/content?take=100").await;
        assert_eq!(result, Some(body));
    }

    #[tokio::test]
    async fn test_get_swallows_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let api = client_for(&mock_server);
        assert_eq!(api.get("/missing").await, None);
        assert!(matches!(
            api.try_get("/missing").await,
            Err(AppError::ApiNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_swallows_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let api = client_for(&mock_server);
        assert_eq!(api.get("/content").await, None);
        assert!(matches!(
            api.try_get("/content").await,
            Err(AppError::ApiMalformedJson { .. })
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_classified() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let api = client_for(&mock_server);
        let error = api.try_get("/content").await.unwrap_err();
        assert!(matches!(error, AppError::ApiServerError { status: 500, .. }));
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn test_retries_transient_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&mock_server)
            .await;

        let api = ApiClient::with_client(create_test_http_client(), mock_server.uri())
            .with_max_retries(1);
        assert_eq!(api.get("/content").await, Some(json!({"items": []})));
    }

    #[tokio::test]
    async fn test_connection_failure_returns_none() {
        let api = ApiClient::with_client(create_test_http_client(), "http://127.0.0.1:9")
            .with_max_retries(0);
        assert_eq!(api.get("/content").await, None);
        assert!(api.try_get("/content").await.unwrap_err().is_retryable());
    }

    #[test]
    fn test_new_uses_config_domain() {
        let config = Config {
            api_domain: "http://localhost:64203/".to_string(),
            ..Config::default()
        };
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:64203");
        assert_eq!(
            api.url_for("/umbraco/delivery/api/v1/content?take=5"),
            "http://localhost:64203/umbraco/delivery/api/v1/content?take=5"
        );

        let bare = Config {
            api_domain: "cms.example.com".to_string(),
            ..Config::default()
        };
        assert_eq!(ApiClient::new(&bare).unwrap().base_url(), "https://cms.example.com");
    }
}
