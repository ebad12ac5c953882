//! Process-lifetime snapshots of whole remote collections.
//!
//! A [`ResourceCache`] is filled by the first successful full fetch of its
//! collection and never refreshed afterwards. There is no TTL and no
//! eviction. Caches are plain values owned by the composition root and
//! shared through `Arc`, so every test run can start from an empty one.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::api::{decode, ApiError, Transport};
use crate::catalog::{Item, ItemId};

pub struct ResourceCache<T: Item> {
    path: String,
    transport: Arc<dyn Transport>,
    snapshot: OnceCell<Arc<Vec<T>>>,
}

impl<T: Item> ResourceCache<T> {
    pub fn new(path: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            path: path.into(),
            transport,
            snapshot: OnceCell::new(),
        }
    }

    /// Collection path this cache mirrors.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Return the snapshot, fetching the whole collection first if needed.
    ///
    /// Callers arriving while the first fetch is in flight wait for it
    /// instead of issuing their own. A failed fetch leaves the cache empty,
    /// so the next call tries again.
    pub async fn ensure_populated(&self) -> Result<Arc<Vec<T>>, ApiError> {
        let snapshot = self
            .snapshot
            .get_or_try_init(|| self.fetch_snapshot())
            .await?;
        Ok(Arc::clone(snapshot))
    }

    async fn fetch_snapshot(&self) -> Result<Arc<Vec<T>>, ApiError> {
        tracing::debug!(path = %self.path, "Populating resource cache");

        let body = match self.transport.get_json(&self.path, &[]).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(path = %self.path, error = %e, "Resource cache population failed");
                return Err(e);
            }
        };
        let items: Vec<T> = decode(&self.path, body)?;

        tracing::info!(path = %self.path, count = items.len(), "Resource cache populated");
        Ok(Arc::new(items))
    }

    pub fn is_populated(&self) -> bool {
        self.snapshot.initialized()
    }

    /// The stored snapshot, without triggering a fetch.
    pub fn snapshot(&self) -> Option<Arc<Vec<T>>> {
        self.snapshot.get().cloned()
    }

    /// Number of items in the snapshot once populated.
    pub fn total_count(&self) -> Option<u64> {
        self.snapshot.get().map(|items| items.len() as u64)
    }

    /// Look up a record in the snapshot by identifier.
    pub fn find(&self, id: &ItemId) -> Option<T> {
        self.snapshot
            .get()
            .and_then(|items| items.iter().find(|item| &item.id() == id).cloned())
    }
}
