use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the remote storefront API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Bearer token attached to every request when set.
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Page sizes and totals for the paginated resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_product_page_size")]
    pub product_page_size: u32,
    #[serde(default = "default_user_page_size")]
    pub user_page_size: u32,
    /// Total number of products, if known. The products endpoint does not
    /// report a count, so without this the product pages only know whether
    /// another page follows.
    #[serde(default)]
    pub product_total_count: Option<u64>,
}

/// Fixed slices of the product list shown on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
    #[serde(default = "default_featured_offset")]
    pub featured_offset: u32,
    #[serde(default = "default_deals_limit")]
    pub deals_limit: u32,
    #[serde(default = "default_deals_offset")]
    pub deals_offset: u32,
    /// Number of categories in the home screen strip.
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,
}

fn default_base_url() -> String {
    "https://api.escuelajs.co/api/v1".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_product_page_size() -> u32 {
    10
}

fn default_user_page_size() -> u32 {
    20
}

fn default_featured_limit() -> u32 {
    10
}

fn default_featured_offset() -> u32 {
    10
}

fn default_deals_limit() -> u32 {
    20
}

fn default_deals_offset() -> u32 {
    1
}

fn default_category_limit() -> usize {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            auth_token: None,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            product_page_size: default_product_page_size(),
            user_page_size: default_user_page_size(),
            product_total_count: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            featured_offset: default_featured_offset(),
            deals_limit: default_deals_limit(),
            deals_offset: default_deals_offset(),
            category_limit: default_category_limit(),
        }
    }
}
