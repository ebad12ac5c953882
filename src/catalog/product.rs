use serde::{Deserialize, Serialize};

use crate::catalog::item::{Item, ItemId};

/// Product as served by `/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Category embedded in a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// First image, used as the card thumbnail.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Item for Product {
    fn id(&self) -> ItemId {
        ItemId::Int(self.id)
    }
}
