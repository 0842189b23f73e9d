use std::sync::Arc;

use crate::mvi::{Action, ActionKind, ReduceError, SliceReducer};
use crate::state::{Slice, StateTree};

use super::state::DetailState;

pub struct DetailReducer;

impl SliceReducer for DetailReducer {
    const SLICE: Slice = Slice::Detail;

    fn handles() -> &'static [ActionKind] {
        &[
            ActionKind::FetchDetail,
            ActionKind::ShowDetail,
            ActionKind::FetchStraatbeeld,
            ActionKind::ShowSearchResultsByQuery,
            ActionKind::ShowSearchResultsByClick,
            ActionKind::ShowPage,
        ]
    }

    fn reduce(state: &StateTree, action: &Action) -> Result<StateTree, ReduceError> {
        let detail = match action {
            Action::FetchDetail(uri) => Some(Arc::new(DetailState {
                uri: require_uri(ActionKind::FetchDetail, uri)?,
                is_loading: true,
            })),

            Action::ShowDetail(payload) => Some(Arc::new(DetailState {
                uri: require_uri(ActionKind::ShowDetail, &payload.uri)?,
                is_loading: false,
            })),

            Action::FetchStraatbeeld(_)
            | Action::ShowSearchResultsByQuery(_)
            | Action::ShowSearchResultsByClick(_)
            | Action::ShowPage(_) => None,

            other => return Err(Self::mismatch(other)),
        };

        Ok(StateTree {
            detail,
            ..state.clone()
        })
    }
}

fn require_uri(action: ActionKind, uri: &str) -> Result<String, ReduceError> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(ReduceError::invalid(action, "uri is empty"));
    }
    Ok(uri.to_string())
}
