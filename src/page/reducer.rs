use crate::mvi::{Action, ActionKind, ReduceError, SliceReducer};
use crate::state::{Slice, StateTree};

pub struct PageReducer;

impl SliceReducer for PageReducer {
    const SLICE: Slice = Slice::Page;

    fn handles() -> &'static [ActionKind] {
        &[
            ActionKind::ShowPage,
            ActionKind::FetchStraatbeeld,
            ActionKind::ShowSearchResultsByQuery,
            ActionKind::ShowSearchResultsByClick,
            ActionKind::FetchDetail,
            ActionKind::ShowDetail,
        ]
    }

    fn reduce(state: &StateTree, action: &Action) -> Result<StateTree, ReduceError> {
        let page = match action {
            Action::ShowPage(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ReduceError::invalid(ActionKind::ShowPage, "page name is empty"));
                }
                Some(name.to_string())
            }

            Action::FetchStraatbeeld(_)
            | Action::ShowSearchResultsByQuery(_)
            | Action::ShowSearchResultsByClick(_)
            | Action::FetchDetail(_)
            | Action::ShowDetail(_) => None,

            other => return Err(Self::mismatch(other)),
        };

        Ok(StateTree {
            page,
            ..state.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::default_state;

    #[test]
    fn show_page_sets_name() {
        let output = PageReducer::reduce(&default_state(), &Action::ShowPage("about".into())).unwrap();
        assert_eq!(output.page.as_deref(), Some("about"));
    }

    #[test]
    fn fetch_detail_clears_page() {
        let output =
            PageReducer::reduce(&default_state(), &Action::FetchDetail("bag/1".into())).unwrap();
        assert_eq!(output.page, None);
    }
}
