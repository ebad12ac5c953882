use std::marker::PhantomData;

use crate::catalog::Item;
use crate::pagination::{PageInfo, PageRequest};
use crate::ui::mvi::Reducer;
use crate::ui::pagination::intent::PaginationIntent;
use crate::ui::pagination::state::{LoadStatus, PaginationState};

pub struct PaginationReducer<T>(PhantomData<T>);

impl<T: Item + PartialEq> Reducer for PaginationReducer<T> {
    type State = PaginationState<T>;
    type Intent = PaginationIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaginationIntent::Navigate { page, request } => PaginationState {
                status: LoadStatus::Loading,
                pending_page: Some(page),
                latest_request: request,
                ..state
            },
            PaginationIntent::Loaded {
                page,
                request,
                result,
            } => {
                if request != state.latest_request {
                    // Superseded by a newer navigation
                    return state;
                }
                let info = match PageRequest::new(page, state.page_size) {
                    Ok(page_request) => PageInfo::new(page_request, &result),
                    Err(_) => return state,
                };
                PaginationState {
                    status: LoadStatus::Ready,
                    current_page: page,
                    total_pages: info.total_pages,
                    total_count: result.total_count,
                    has_next_page: info.has_next_page,
                    items: result.items,
                    error: None,
                    pending_page: None,
                    ..state
                }
            }
            PaginationIntent::Failed { request, message } => {
                if request != state.latest_request {
                    return state;
                }
                // Items from the last good page stay visible.
                PaginationState {
                    status: LoadStatus::Failed,
                    error: Some(message),
                    pending_page: None,
                    ..state
                }
            }
            PaginationIntent::Resize { page_size } => PaginationState {
                latest_request: state.latest_request,
                ..PaginationState::new(1, page_size)
            },
        }
    }
}
