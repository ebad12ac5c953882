//! Splitting remote collections into numbered pages.

mod fetcher;
mod page;
mod strategy;

pub use fetcher::{PageSource, PaginatedFetcher};
pub use page::{total_pages, PageError, PageInfo, PageRequest, PageResult};
pub use strategy::PaginationStrategy;
