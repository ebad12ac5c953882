//! Storefront domain records.

mod category;
mod item;
mod mock;
mod order;
mod product;
mod resource;
mod user;

pub use category::{normalize_image_url, Category, CategoryRecord, PLACEHOLDER_IMAGE_URL};
pub use item::{Item, ItemId};
pub use mock::{find_mock_product, mock_categories, mock_products, MockProduct};
pub use order::{mock_orders, Order, OrderItem, OrderStatus};
pub use product::{Product, ProductCategory};
pub use resource::ResourceKind;
pub use user::User;
