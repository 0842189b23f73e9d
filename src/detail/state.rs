use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailState {
    /// API endpoint of the object.
    pub uri: String,
    pub is_loading: bool,
}

impl SliceState for DetailState {}
