use crate::catalog::Item;
use crate::pagination::PageResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PaginationIntent<T> {
    /// A fetch for `page` was issued as request number `request`.
    Navigate { page: u32, request: u64 },
    /// Request `request` returned the items of `page`.
    Loaded {
        page: u32,
        request: u64,
        result: PageResult<T>,
    },
    /// Request `request` failed.
    Failed { request: u64, message: String },
    /// Page size changed; restart from page 1 with nothing known.
    Resize { page_size: u32 },
}

impl<T: Item> Intent for PaginationIntent<T> {}
