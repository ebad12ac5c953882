//! Error types for the storefront API client.

use thiserror::Error;

/// Errors that can occur while talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Base URL and path did not form a valid URL
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to connect or read the response
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-2xx status
    #[error("Upstream error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An interceptor refused to pass the request or response on
    #[error("Interceptor '{name}' failed: {message}")]
    Interceptor { name: &'static str, message: String },
}

impl ApiError {
    /// Short machine-readable classification, used as a log field.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Build(_) => "build_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "upstream_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::Interceptor { .. } => "interceptor_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
