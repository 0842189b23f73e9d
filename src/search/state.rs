use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;
use crate::state::Location;

/// An active search: by free-text query or by a click on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: Option<String>,
    pub location: Option<Location>,
}

impl SliceState for SearchState {}
