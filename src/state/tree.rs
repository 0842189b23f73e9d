use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::detail::DetailState;
use crate::map::MapState;
use crate::search::SearchState;
use crate::straatbeeld::StraatbeeldState;

/// Top-level region of the state tree.
///
/// The declaration order is the order in which slice reducers run for a
/// single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slice {
    Straatbeeld,
    Map,
    Search,
    Detail,
    Page,
}

impl Slice {
    pub const ALL: [Slice; 5] = [
        Slice::Straatbeeld,
        Slice::Map,
        Slice::Search,
        Slice::Detail,
        Slice::Page,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Slice::Straatbeeld => "straatbeeld",
            Slice::Map => "map",
            Slice::Search => "search",
            Slice::Detail => "detail",
            Slice::Page => "page",
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole application state.
///
/// Slices sit behind `Arc` so a new tree shares every slice a reducer did
/// not rebind. `search`, `detail` and `page` are the current-view slots; at
/// most one of them is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTree {
    pub straatbeeld: Option<Arc<StraatbeeldState>>,
    pub map: Arc<MapState>,
    pub search: Option<Arc<SearchState>>,
    pub detail: Option<Arc<DetailState>>,
    pub page: Option<String>,
}

impl StateTree {
    /// True when no more than one view slot is occupied.
    pub fn has_exclusive_view(&self) -> bool {
        let occupied = [
            self.search.is_some(),
            self.detail.is_some(),
            self.page.is_some(),
        ];
        occupied.into_iter().filter(|set| *set).count() <= 1
    }

    /// Tree with every view slot emptied, other slices shared.
    pub fn without_views(&self) -> StateTree {
        StateTree {
            search: None,
            detail: None,
            page: None,
            ..self.clone()
        }
    }
}

impl Default for StateTree {
    fn default() -> Self {
        default_state()
    }
}

/// The initial tree every store starts from.
pub fn default_state() -> StateTree {
    StateTree {
        straatbeeld: None,
        map: Arc::new(MapState::default()),
        search: None,
        detail: None,
        page: Some("home".to_string()),
    }
}
