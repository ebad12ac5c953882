//! Client-side catalog for the storefront demo API: an HTTP client,
//! per-resource snapshot caches, paginated fetchers and the pagination
//! controllers screens bind to.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod pagination;
pub mod services;
pub mod storefront;
pub mod ui;

pub use storefront::Storefront;
