use std::sync::Arc;

use crate::api::{decode, page_query, ApiError, Transport};
use crate::catalog::{Category, CategoryRecord, Product, ResourceKind};
use crate::config::CatalogConfig;

/// Categories and the fixed product slices shown on the home screen.
#[derive(Clone)]
pub struct CatalogService {
    transport: Arc<dyn Transport>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(transport: Arc<dyn Transport>, config: CatalogConfig) -> Self {
        Self { transport, config }
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let path = ResourceKind::Categories.path();
        let body = self.transport.get_json(path, &[]).await?;
        let records: Vec<CategoryRecord> = decode(path, body)?;
        Ok(records.into_iter().map(Category::from).collect())
    }

    /// The first `limit` categories.
    pub async fn top_categories(&self, limit: usize) -> Result<Vec<Category>, ApiError> {
        let mut categories = self.categories().await?;
        categories.truncate(limit);
        Ok(categories)
    }

    /// Category strip with the configured length.
    pub async fn home_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.top_categories(self.config.category_limit).await
    }

    pub async fn category(&self, id: &str) -> Result<Category, ApiError> {
        let path = ResourceKind::Categories.item_path(id);
        let body = self.transport.get_json(&path, &[]).await?;
        let record: CategoryRecord = decode(&path, body)?;
        Ok(Category::from(record))
    }

    pub async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        self.product_slice(self.config.featured_limit, self.config.featured_offset)
            .await
    }

    pub async fn special_deals(&self) -> Result<Vec<Product>, ApiError> {
        self.product_slice(self.config.deals_limit, self.config.deals_offset)
            .await
    }

    pub async fn product(&self, id: u64) -> Result<Product, ApiError> {
        let path = ResourceKind::Products.item_path(id);
        let body = self.transport.get_json(&path, &[]).await?;
        decode(&path, body)
    }

    async fn product_slice(&self, limit: u32, offset: u32) -> Result<Vec<Product>, ApiError> {
        let path = ResourceKind::Products.path();
        let query = page_query(limit, offset.into());
        let body = self.transport.get_json(path, &query).await?;
        decode(path, body)
    }
}
