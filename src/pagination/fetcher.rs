use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{decode, page_query, ApiError, Transport};
use crate::cache::ResourceCache;
use crate::catalog::Item;
use crate::pagination::page::{PageError, PageRequest, PageResult};
use crate::pagination::strategy::PaginationStrategy;

/// Source of pages for a pagination controller.
#[async_trait]
pub trait PageSource<T: Item>: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<T>, PageError>;
}

/// Fetches pages of one remote collection using a fixed strategy.
pub struct PaginatedFetcher<T: Item> {
    path: String,
    transport: Arc<dyn Transport>,
    strategy: PaginationStrategy<T>,
}

impl<T: Item> PaginatedFetcher<T> {
    /// Pages sliced out of a cached snapshot of the whole collection.
    pub fn client_side(cache: Arc<ResourceCache<T>>, transport: Arc<dyn Transport>) -> Self {
        Self {
            path: cache.path().to_string(),
            transport,
            strategy: PaginationStrategy::ClientSideSlice { cache },
        }
    }

    /// Pages requested one at a time from the server.
    pub fn server_offset(
        path: impl Into<String>,
        transport: Arc<dyn Transport>,
        total_count: Option<u64>,
    ) -> Self {
        Self {
            path: path.into(),
            transport,
            strategy: PaginationStrategy::ServerOffset { total_count },
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn strategy(&self) -> &PaginationStrategy<T> {
        &self.strategy
    }

    async fn fetch_remote(&self, request: PageRequest) -> Result<Vec<T>, ApiError> {
        let query = page_query(request.page_size(), request.offset());
        let body = self.transport.get_json(&self.path, &query).await?;
        let mut items: Vec<T> = decode(&self.path, body)?;
        items.truncate(request.page_size() as usize);
        Ok(items)
    }

    async fn slice_cached(
        &self,
        cache: &ResourceCache<T>,
        request: PageRequest,
    ) -> Result<PageResult<T>, PageError> {
        let snapshot = cache.ensure_populated().await?;
        let total = snapshot.len();
        let page_size = request.page_size() as usize;
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);

        let local: Vec<T> = if start >= total {
            Vec::new()
        } else {
            let end = total.min(start.saturating_add(page_size));
            snapshot[start..end].to_vec()
        };

        // A short page inside the collection may just mean the snapshot is
        // incomplete; ask the server once and keep whichever is longer.
        let items = if local.len() < page_size && start < total {
            match self.fetch_remote(request).await {
                Ok(remote) if remote.len() > local.len() => remote,
                Ok(_) => local,
                Err(e) => {
                    tracing::debug!(
                        path = %self.path,
                        page = request.page_number(),
                        error = %e,
                        "Supplementary page fetch failed, using cached slice"
                    );
                    local
                }
            }
        } else {
            local
        };

        Ok(PageResult {
            items,
            total_count: Some(total as u64),
        })
    }
}

#[async_trait]
impl<T: Item> PageSource<T> for PaginatedFetcher<T> {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<T>, PageError> {
        tracing::debug!(
            path = %self.path,
            strategy = self.strategy.name(),
            page = request.page_number(),
            page_size = request.page_size(),
            "Fetching page"
        );

        match &self.strategy {
            PaginationStrategy::ClientSideSlice { cache } => self.slice_cached(cache, request).await,
            PaginationStrategy::ServerOffset { total_count } => {
                let items = self.fetch_remote(request).await?;
                Ok(PageResult {
                    items,
                    total_count: *total_count,
                })
            }
        }
    }
}
