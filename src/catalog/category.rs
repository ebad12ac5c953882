use serde::{Deserialize, Serialize};

use crate::catalog::item::{Item, ItemId};

/// Shown in place of category images that are not absolute URLs.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Category record as served by `/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: String,
}

/// Category as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            image_url: normalize_image_url(record.image),
        }
    }
}

impl Item for Category {
    fn id(&self) -> ItemId {
        ItemId::Str(self.id.clone())
    }
}

/// Keep absolute image URLs and missing images; relative paths become the
/// placeholder.
pub fn normalize_image_url(image: String) -> String {
    if image.is_empty() || image.starts_with("http") {
        image
    } else {
        PLACEHOLDER_IMAGE_URL.to_string()
    }
}
