use std::sync::Arc;

use crate::cache::ResourceCache;
use crate::catalog::Item;

/// How a resource is split into pages. Chosen per resource kind when the
/// fetcher is built.
pub enum PaginationStrategy<T: Item> {
    /// Fetch the whole collection once into a cache and slice it locally.
    ClientSideSlice { cache: Arc<ResourceCache<T>> },
    /// Ask the server for each page with `limit`/`offset`.
    ServerOffset {
        /// Collection size if known ahead of time; the server does not
        /// report one.
        total_count: Option<u64>,
    },
}

impl<T: Item> PaginationStrategy<T> {
    pub fn name(&self) -> &'static str {
        match self {
            PaginationStrategy::ClientSideSlice { .. } => "client_side_slice",
            PaginationStrategy::ServerOffset { .. } => "server_offset",
        }
    }
}
