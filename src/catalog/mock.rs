use serde::{Deserialize, Serialize};

use crate::catalog::category::Category;
use crate::catalog::item::{Item, ItemId};

/// Product from the bundled showcase catalog. Unlike [`Product`] these
/// carry an optional discount and review data, and are never fetched.
///
/// [`Product`]: crate::catalog::Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    pub image_url: String,
    pub rating: f64,
    pub review_count: u32,
    pub category: String,
    pub in_stock: bool,
}

impl MockProduct {
    /// Price charged: the discount when there is a non-zero one, otherwise
    /// the list price.
    pub fn effective_price(&self) -> f64 {
        self.discount_price
            .filter(|price| *price > 0.0)
            .unwrap_or(self.price)
    }
}

impl Item for MockProduct {
    fn id(&self) -> ItemId {
        ItemId::Str(self.id.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    discount_price: Option<f64>,
    rating: f64,
    review_count: u32,
    category: &str,
    in_stock: bool,
) -> MockProduct {
    MockProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        discount_price,
        image_url: "https://placehold.co/300".to_string(),
        rating,
        review_count,
        category: category.to_string(),
        in_stock,
    }
}

/// Showcase products backing the cart, deals strip and product detail.
pub fn mock_products() -> Vec<MockProduct> {
    vec![
        product(
            "1",
            "Premium Cloud Storage",
            "High-performance cloud storage solution with unlimited bandwidth",
            99.99,
            Some(79.99),
            4.8,
            245,
            "storage",
            true,
        ),
        product(
            "2",
            "Cloud Server Pro",
            "Enterprise-grade cloud server with dedicated resources",
            199.99,
            None,
            4.9,
            189,
            "servers",
            true,
        ),
        product(
            "3",
            "Database Cluster",
            "Scalable database solution with automatic backups",
            149.99,
            Some(129.99),
            4.7,
            156,
            "databases",
            true,
        ),
        product(
            "4",
            "AI Computing Platform",
            "Advanced AI computing resources with GPU acceleration",
            299.99,
            None,
            4.9,
            78,
            "ai",
            false,
        ),
        product(
            "5",
            "Content Delivery Network",
            "Global CDN with edge locations for fast content delivery",
            79.99,
            Some(59.99),
            4.6,
            210,
            "networking",
            true,
        ),
        product(
            "6",
            "Kubernetes Cluster",
            "Managed Kubernetes service for container orchestration",
            249.99,
            None,
            4.8,
            92,
            "containers",
            true,
        ),
    ]
}

pub fn mock_categories() -> Vec<Category> {
    [
        ("1", "Storage"),
        ("2", "Servers"),
        ("3", "Databases"),
        ("4", "AI & ML"),
        ("5", "Networking"),
        ("6", "Containers"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
        image_url: "https://placehold.co/100".to_string(),
    })
    .collect()
}

/// Showcase product by id.
pub fn find_mock_product(id: &str) -> Option<MockProduct> {
    mock_products().into_iter().find(|product| product.id == id)
}
