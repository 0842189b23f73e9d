use serde::{Deserialize, Serialize};

use crate::map::Highlight;

/// A resolved detail fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetailPayload {
    pub uri: String,
    /// Geometry of the object, highlighted on the map when present.
    #[serde(default)]
    pub geometry: Option<Highlight>,
}
