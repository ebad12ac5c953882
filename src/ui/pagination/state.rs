use crate::catalog::Item;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Created, nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Everything a paged list screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState<T> {
    pub status: LoadStatus,
    /// Page whose items are in `items`. Before the first successful load
    /// this is the page the controller starts on.
    pub current_page: u32,
    pub page_size: u32,
    /// `None` until a load succeeds, and afterwards whenever the source
    /// does not know the collection size.
    pub total_pages: Option<u32>,
    pub total_count: Option<u64>,
    pub has_next_page: bool,
    pub items: Vec<T>,
    pub error: Option<String>,
    /// Page the in-flight navigation is loading.
    pub pending_page: Option<u32>,
    /// Sequence number of the newest navigation.
    pub latest_request: u64,
}

impl<T> PaginationState<T> {
    pub fn new(initial_page: u32, page_size: u32) -> Self {
        Self {
            status: LoadStatus::Idle,
            current_page: initial_page.max(1),
            page_size,
            total_pages: None,
            total_count: None,
            has_next_page: false,
            items: Vec::new(),
            error: None,
            pending_page: None,
            latest_request: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Highest page a navigation may target.
    ///
    /// With an unknown total this is one past the current page while the
    /// current page came back full. Before any page has loaded it is the
    /// current page, so re-requesting it retries a failed first load.
    pub fn last_navigable_page(&self) -> u32 {
        match self.total_pages {
            Some(total_pages) => total_pages,
            None if self.has_next_page => self.current_page.saturating_add(1),
            None => self.current_page,
        }
    }

    pub fn can_navigate_to(&self, page: u32) -> bool {
        page >= 1 && page <= self.last_navigable_page()
    }
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl<T: Item + PartialEq> UiState for PaginationState<T> {}
