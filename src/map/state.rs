use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mvi::SliceState;
use crate::state::Location;

/// Lowest zoom level the base layers are rendered at.
pub const MIN_ZOOM: u8 = 8;

/// Highest zoom level the base layers are rendered at.
pub const MAX_ZOOM: u8 = 16;

/// A selected map feature, usually a GeoJSON geometry.
///
/// The store does not interpret it; the map renderer does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Highlight(pub Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapState {
    pub base_layer: String,
    pub overlays: Vec<String>,
    pub view_center: Location,
    pub zoom: u8,
    pub highlight: Option<Highlight>,
    /// Set while a panorama or detail fetch is in flight.
    pub is_loading: bool,
}

impl SliceState for MapState {}

impl Default for MapState {
    fn default() -> Self {
        Self {
            base_layer: "topografie".to_string(),
            overlays: Vec::new(),
            view_center: Location::new(52.3719, 4.9012),
            zoom: 9,
            highlight: None,
            is_loading: false,
        }
    }
}

impl MapState {
    pub fn has_overlay(&self, name: &str) -> bool {
        self.overlays.iter().any(|overlay| overlay == name)
    }
}
