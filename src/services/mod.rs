//! Non-paginated lookups used by the storefront screens.

mod cart;
mod catalog;
mod orders;
mod users;

pub use cart::{CartItem, CartService};
pub use catalog::CatalogService;
pub use orders::OrderService;
pub use users::UserService;
