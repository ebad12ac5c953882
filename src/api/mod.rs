//! Thin REST client for the storefront API.

mod client;
mod error;
mod interceptor;
mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use interceptor::{BearerAuth, RequestInterceptor, ResponseInterceptor};
pub use transport::{decode, page_query, Transport};
