//! Paged list controller built on the MVI primitives.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::PaginationController;
pub use intent::PaginationIntent;
pub use reducer::PaginationReducer;
pub use state::{LoadStatus, PaginationState};
