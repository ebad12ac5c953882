use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::Item;
use crate::pagination::{PageRequest, PageSource};
use crate::ui::mvi::Reducer;
use crate::ui::pagination::intent::PaginationIntent;
use crate::ui::pagination::reducer::PaginationReducer;
use crate::ui::pagination::state::{LoadStatus, PaginationState};

/// Drives one paged list: issues fetches for navigation commands and
/// publishes the resulting state.
///
/// Each navigation that passes the bounds check issues exactly one fetch,
/// plus one more for the last page if the requested page turns out to lie
/// past the end.
/// Navigations are numbered; when several overlap, only the newest one's
/// result is applied and older results are dropped when they arrive.
pub struct PaginationController<T: Item + PartialEq> {
    source: Arc<dyn PageSource<T>>,
    label: String,
    state: watch::Sender<PaginationState<T>>,
    next_request: AtomicU64,
}

impl<T: Item + PartialEq> PaginationController<T> {
    /// `label` names the resource in error messages ("Failed to fetch {label}").
    pub fn new(source: Arc<dyn PageSource<T>>, page_size: u32, label: impl Into<String>) -> Self {
        let (state, _) = watch::channel(PaginationState::new(1, page_size));
        Self {
            source,
            label: label.into(),
            state,
            next_request: AtomicU64::new(0),
        }
    }

    /// Start on `page` instead of page 1. Only meaningful before `start`.
    pub fn with_initial_page(self, page: u32) -> Self {
        self.state.send_modify(|state| {
            *state = PaginationState::new(page, state.page_size);
        });
        self
    }

    /// Use `page_size` instead of the size given to `new`. Only meaningful
    /// before `start`; use `set_page_size` afterwards.
    pub fn with_page_size(self, page_size: u32) -> Self {
        self.state.send_modify(|state| {
            *state = PaginationState::new(state.current_page, page_size);
        });
        self
    }

    /// Current state snapshot.
    pub fn state(&self) -> PaginationState<T> {
        self.state.borrow().clone()
    }

    /// Receive every state change.
    pub fn subscribe(&self) -> watch::Receiver<PaginationState<T>> {
        self.state.subscribe()
    }

    /// Load the initial page.
    pub async fn start(&self) {
        let page = self.state.borrow().current_page;
        self.load(page).await;
    }

    /// Load `page` if it is within bounds. Returns whether a fetch was issued.
    pub async fn go_to_page(&self, page: u32) -> bool {
        let allowed = self.state.borrow().can_navigate_to(page);
        if !allowed {
            tracing::debug!(resource = %self.label, page, "Navigation out of bounds ignored");
            return false;
        }
        self.load(page).await;
        true
    }

    pub async fn next_page(&self) -> bool {
        let page = self.state.borrow().current_page.saturating_add(1);
        self.go_to_page(page).await
    }

    pub async fn previous_page(&self) -> bool {
        let current = self.state.borrow().current_page;
        if current <= 1 {
            return false;
        }
        self.go_to_page(current - 1).await
    }

    /// Fetch the current page again, regardless of bounds.
    pub async fn reload(&self) {
        let page = self.state.borrow().current_page;
        self.load(page).await;
    }

    /// Switch to a new page size and load page 1 with it.
    pub async fn set_page_size(&self, page_size: u32) {
        self.dispatch(PaginationIntent::Resize { page_size });
        self.load(1).await;
    }

    async fn load(&self, page: u32) {
        let mut page = page;
        // A page past the end (a stale initial page, or a collection that
        // shrank) is replaced by the last page once the total is known.
        while let Some(last) = self.load_once(page).await {
            tracing::debug!(
                resource = %self.label,
                page,
                last,
                "Requested page past the end, loading last page"
            );
            page = last;
        }
    }

    /// Returns the last page when `page` was applied but lies beyond it.
    async fn load_once(&self, page: u32) -> Option<u32> {
        let request = self.next_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(PaginationIntent::Navigate { page, request });

        let page_size = self.state.borrow().page_size;
        tracing::debug!(resource = %self.label, page, page_size, request, "Loading page");

        let outcome = match PageRequest::new(page, page_size) {
            Ok(page_request) => self.source.fetch_page(page_request).await,
            Err(e) => Err(e),
        };

        let intent = match outcome {
            Ok(result) => PaginationIntent::Loaded {
                page,
                request,
                result,
            },
            Err(e) => {
                tracing::warn!(resource = %self.label, page, request, error = %e, "Page load failed");
                PaginationIntent::Failed {
                    request,
                    message: format!("Failed to fetch {}", self.label),
                }
            }
        };

        let latest = self.state.borrow().latest_request;
        if latest != request {
            tracing::debug!(
                resource = %self.label,
                page,
                request,
                latest,
                "Discarding superseded page result"
            );
            return None;
        }
        self.dispatch(intent);
        self.page_past_end()
    }

    fn page_past_end(&self) -> Option<u32> {
        let state = self.state.borrow();
        match state.total_pages {
            Some(last) if state.status == LoadStatus::Ready && state.current_page > last => {
                Some(last)
            }
            _ => None,
        }
    }

    fn dispatch(&self, intent: PaginationIntent<T>) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = PaginationReducer::<T>::reduce(current, intent);
        });
    }
}
