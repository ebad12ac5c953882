use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tokio::time::timeout;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::interceptor::{BearerAuth, RequestInterceptor, ResponseInterceptor};
use crate::api::transport::Transport;
use crate::config::ApiConfig;

/// HTTP client for the storefront REST API.
///
/// Every request goes to `{base_url}/{path}` with a JSON content type and
/// the configured timeout. Failures are never retried.
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    request_interceptors: RwLock<Vec<Arc<dyn RequestInterceptor>>>,
    response_interceptors: RwLock<Vec<Arc<dyn ResponseInterceptor>>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .default_headers(headers)
            .build()
            .map_err(ApiError::Build)?;

        let api = Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds.into()),
            request_interceptors: RwLock::new(Vec::new()),
            response_interceptors: RwLock::new(Vec::new()),
        };

        if let Some(token) = &config.auth_token {
            api.add_request_interceptor(Arc::new(BearerAuth::new(token.clone())));
        }

        Ok(api)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Register an interceptor that runs on every outgoing request, after
    /// the ones already registered.
    pub fn add_request_interceptor(&self, interceptor: Arc<dyn RequestInterceptor>) {
        tracing::debug!(interceptor = interceptor.name(), "Request interceptor added");
        self.request_interceptors.write().push(interceptor);
    }

    /// Register an interceptor that runs on every successful response body.
    pub fn add_response_interceptor(&self, interceptor: Arc<dyn ResponseInterceptor>) {
        tracing::debug!(interceptor = interceptor.name(), "Response interceptor added");
        self.response_interceptors.write().push(interceptor);
    }

    /// Build the full URL for a resource path and query.
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// `GET {base_url}/{path}?{query}` returning the JSON body.
    pub async fn request(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(path, query)?;

        let interceptors = self.request_interceptors.read().clone();
        let mut builder = self.client.get(url.clone());
        for interceptor in &interceptors {
            builder = interceptor.intercept(builder)?;
        }

        tracing::debug!(%request_id, %url, "GET");

        let result = match timeout(self.timeout, self.send(builder, &url)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.timeout.as_secs(),
            }),
        };

        let mut body = match result {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    %request_id,
                    %url,
                    error_type = e.error_type(),
                    error = %e,
                    "Request failed"
                );
                return Err(e);
            }
        };

        let interceptors = self.response_interceptors.read().clone();
        for interceptor in &interceptors {
            body = interceptor.intercept(path, body)?;
        }

        tracing::debug!(%request_id, %url, "Request completed");
        Ok(body)
    }

    async fn send(&self, builder: RequestBuilder, url: &Url) -> Result<Value, ApiError> {
        let response = builder.send().await.map_err(|e| self.classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e, url))?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            path: url.path().to_string(),
            source,
        })
    }

    fn classify(&self, err: reqwest::Error, url: &Url) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            ApiError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.request(path, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client().endpoint("/products", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.escuelajs.co/api/v1/products");
    }

    #[test]
    fn test_endpoint_appends_query() {
        let query = [("limit", "10".to_string()), ("offset", "20".to_string())];
        let url = client().endpoint("products", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.escuelajs.co/api/v1/products?limit=10&offset=20"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/api/".to_string(),
            ..ApiConfig::default()
        };
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:9000/api");
        let url = api.endpoint("/users/3", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/users/3");
    }

    #[test]
    fn test_timeout_from_config() {
        assert_eq!(client().timeout(), Duration::from_secs(10));
    }
}
