//! Read models derived from the state tree.
//!
//! Subscribers re-derive these on every notification; they never assume
//! which slices changed.

use crate::state::{Camera, Location, PanoramaId, StateTree};

/// What the panorama component needs to render.
///
/// Every field is `None` while no panorama was ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StraatbeeldView {
    pub id: Option<PanoramaId>,
    pub search_location: Option<Location>,
    pub is_loading: Option<bool>,
    pub camera: Option<Camera>,
}

impl StraatbeeldView {
    pub fn from_state(state: &StateTree) -> Self {
        let Some(straatbeeld) = state.straatbeeld.as_deref() else {
            return Self::default();
        };

        Self {
            id: straatbeeld.id(),
            search_location: straatbeeld.location(),
            is_loading: Some(straatbeeld.is_loading),
            camera: Some(straatbeeld.camera),
        }
    }
}
