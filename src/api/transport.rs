use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Anything that can answer `GET {base}/{path}?{query}` with a JSON body.
///
/// [`ApiClient`](super::ApiClient) is the production implementation; caches
/// and fetchers only depend on this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;
}

/// `limit`/`offset` query pair used by the paginated endpoints.
pub fn page_query(limit: u32, offset: u64) -> Vec<(&'static str, String)> {
    vec![("limit", limit.to_string()), ("offset", offset.to_string())]
}

/// Deserialize a JSON body into a typed value.
pub fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}
