//! Hook points around every API request.
//!
//! Request interceptors see the outgoing request before it is sent and may
//! add headers (auth tokens). Response interceptors see the decoded JSON
//! body of every successful response. With no interceptors installed the
//! client passes requests and responses through unchanged.

use reqwest::RequestBuilder;
use serde_json::Value;

use super::error::ApiError;

pub trait RequestInterceptor: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    fn intercept(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError>;
}

pub trait ResponseInterceptor: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &'static str;

    fn intercept(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// Attaches `Authorization: Bearer <token>` to every request.
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestInterceptor for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer_auth"
    }

    fn intercept(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        if self.token.is_empty() {
            return Err(ApiError::Interceptor {
                name: self.name(),
                message: "empty token".to_string(),
            });
        }
        Ok(request.bearer_auth(&self.token))
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth").field("token", &"<redacted>").finish()
    }
}
