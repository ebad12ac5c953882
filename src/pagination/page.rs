use thiserror::Error;

use crate::api::ApiError;

/// Errors produced while fetching a page.
#[derive(Debug, Error)]
pub enum PageError {
    /// Page number or page size was zero
    #[error("Invalid page request: page {page_number} with page size {page_size}")]
    InvalidRequest { page_number: u32, page_size: u32 },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A 1-based page of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Result<Self, PageError> {
        if page_number == 0 || page_size == 0 {
            return Err(PageError::InvalidRequest {
                page_number,
                page_size,
            });
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }
}

/// Items of one page plus the collection size, when the source knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
}

/// Navigation metadata derived from a request and its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// `None` when the source did not report a total.
    pub total_pages: Option<u32>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageInfo {
    pub fn new<T>(request: PageRequest, result: &PageResult<T>) -> Self {
        let total_pages = result
            .total_count
            .map(|total| total_pages(total, request.page_size()));

        let has_next_page = match total_pages {
            Some(total_pages) => request.page_number() < total_pages,
            // Without a total, a full page suggests more may follow.
            None => result.items.len() as u64 == u64::from(request.page_size()),
        };

        Self {
            total_pages,
            has_next_page,
            has_previous_page: request.page_number() > 1,
        }
    }
}

/// `ceil(total_count / page_size)`, never less than one page.
///
/// An empty collection still has a single, empty page so that page 1 is
/// always a valid navigation target.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_count.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
