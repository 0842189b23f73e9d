use std::sync::Arc;

use crate::mvi::{Action, ActionKind, ReduceError, SliceReducer};
use crate::state::{Slice, StateTree};

use super::state::SearchState;

pub struct SearchReducer;

impl SliceReducer for SearchReducer {
    const SLICE: Slice = Slice::Search;

    fn handles() -> &'static [ActionKind] {
        &[
            ActionKind::ShowSearchResultsByQuery,
            ActionKind::ShowSearchResultsByClick,
            ActionKind::FetchStraatbeeld,
            ActionKind::FetchDetail,
            ActionKind::ShowDetail,
            ActionKind::ShowPage,
        ]
    }

    fn reduce(state: &StateTree, action: &Action) -> Result<StateTree, ReduceError> {
        let search = match action {
            Action::ShowSearchResultsByQuery(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Err(ReduceError::invalid(
                        ActionKind::ShowSearchResultsByQuery,
                        "query is empty",
                    ));
                }
                Some(Arc::new(SearchState {
                    query: Some(query.to_string()),
                    location: None,
                }))
            }

            Action::ShowSearchResultsByClick(location) => {
                if !location.is_valid() {
                    return Err(ReduceError::invalid(
                        ActionKind::ShowSearchResultsByClick,
                        format!("location {} is out of range", location),
                    ));
                }
                Some(Arc::new(SearchState {
                    query: None,
                    location: Some(*location),
                }))
            }

            Action::FetchStraatbeeld(_)
            | Action::FetchDetail(_)
            | Action::ShowDetail(_)
            | Action::ShowPage(_) => None,

            other => return Err(Self::mismatch(other)),
        };

        Ok(StateTree {
            search,
            ..state.clone()
        })
    }
}
