//! Composition root: one place that owns the client, the caches, and hands
//! out fetchers, controllers and services wired to them.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Transport};
use crate::cache::ResourceCache;
use crate::catalog::{Product, ResourceKind, User};
use crate::config::Config;
use crate::pagination::PaginatedFetcher;
use crate::services::{CartService, CatalogService, OrderService, UserService};
use crate::ui::pagination::PaginationController;

pub struct Storefront {
    config: Config,
    transport: Arc<dyn Transport>,
    users_cache: Arc<ResourceCache<User>>,
    orders: OrderService,
    cart: CartService,
}

impl Storefront {
    /// Build against the real API described by `config.api`.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// Build against any transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let users_cache = Arc::new(ResourceCache::new(
            ResourceKind::Users.path(),
            Arc::clone(&transport),
        ));
        Self {
            config,
            transport,
            users_cache,
            orders: OrderService::default(),
            cart: CartService::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn users_cache(&self) -> Arc<ResourceCache<User>> {
        Arc::clone(&self.users_cache)
    }

    /// Products are paged by the server.
    pub fn product_pages(&self) -> PaginatedFetcher<Product> {
        PaginatedFetcher::server_offset(
            ResourceKind::Products.path(),
            Arc::clone(&self.transport),
            self.config.pagination.product_total_count,
        )
    }

    /// Users are paged out of the shared users snapshot.
    pub fn user_pages(&self) -> PaginatedFetcher<User> {
        PaginatedFetcher::client_side(self.users_cache(), Arc::clone(&self.transport))
    }

    pub fn products_controller(&self) -> PaginationController<Product> {
        PaginationController::new(
            Arc::new(self.product_pages()),
            self.config.pagination.product_page_size,
            ResourceKind::Products.label(),
        )
    }

    pub fn users_controller(&self) -> PaginationController<User> {
        PaginationController::new(
            Arc::new(self.user_pages()),
            self.config.pagination.user_page_size,
            ResourceKind::Users.label(),
        )
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(Arc::clone(&self.transport), self.config.catalog.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(Arc::clone(&self.transport), self.users_cache())
    }

    pub fn orders(&self) -> OrderService {
        self.orders.clone()
    }

    /// The session cart. Every call returns a handle to the same cart.
    pub fn cart(&self) -> CartService {
        self.cart.clone()
    }
}
