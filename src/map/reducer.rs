use crate::mvi::{rebind, Action, ActionKind, ReduceError, SliceReducer};
use crate::state::{Slice, StateTree};

pub struct MapReducer;

impl SliceReducer for MapReducer {
    const SLICE: Slice = Slice::Map;

    fn handles() -> &'static [ActionKind] {
        &[
            ActionKind::FetchStraatbeeld,
            ActionKind::ShowStraatbeeld,
            ActionKind::MapSetBaseLayer,
            ActionKind::MapAddOverlay,
            ActionKind::MapRemoveOverlay,
            ActionKind::MapPan,
            ActionKind::MapZoom,
            ActionKind::MapHighlight,
            ActionKind::ShowSearchResultsByQuery,
            ActionKind::ShowSearchResultsByClick,
            ActionKind::FetchDetail,
            ActionKind::ShowDetail,
            ActionKind::ShowPage,
        ]
    }

    fn reduce(state: &StateTree, action: &Action) -> Result<StateTree, ReduceError> {
        let map = match action {
            Action::FetchStraatbeeld(_) | Action::FetchDetail(_) => rebind(&state.map, |map| {
                map.is_loading = true;
                map.highlight = None;
            }),

            Action::ShowStraatbeeld(_) => rebind(&state.map, |map| map.is_loading = false),

            Action::ShowDetail(payload) => rebind(&state.map, |map| {
                map.is_loading = false;
                map.highlight = payload.geometry.clone();
            }),

            Action::ShowSearchResultsByQuery(_)
            | Action::ShowSearchResultsByClick(_)
            | Action::ShowPage(_) => {
                if state.map.highlight.is_none() && !state.map.is_loading {
                    return Ok(state.clone());
                }
                rebind(&state.map, |map| {
                    map.is_loading = false;
                    map.highlight = None;
                })
            }

            Action::MapSetBaseLayer(layer) => {
                let layer = require_name(ActionKind::MapSetBaseLayer, layer)?;
                rebind(&state.map, |map| map.base_layer = layer.to_string())
            }

            Action::MapAddOverlay(overlay) => {
                let overlay = require_name(ActionKind::MapAddOverlay, overlay)?;
                if state.map.has_overlay(overlay) {
                    return Ok(state.clone());
                }
                rebind(&state.map, |map| map.overlays.push(overlay.to_string()))
            }

            Action::MapRemoveOverlay(overlay) => {
                let overlay = overlay.trim();
                if !state.map.has_overlay(overlay) {
                    return Ok(state.clone());
                }
                rebind(&state.map, |map| map.overlays.retain(|o| o != overlay))
            }

            Action::MapPan(center) => {
                if !center.is_valid() {
                    return Err(ReduceError::invalid(
                        ActionKind::MapPan,
                        format!("center {} is out of range", center),
                    ));
                }
                rebind(&state.map, |map| map.view_center = *center)
            }

            Action::MapZoom(zoom) => {
                if !(super::MIN_ZOOM..=super::MAX_ZOOM).contains(zoom) {
                    return Err(ReduceError::invalid(
                        ActionKind::MapZoom,
                        format!(
                            "zoom {} outside {}..={}",
                            zoom,
                            super::MIN_ZOOM,
                            super::MAX_ZOOM
                        ),
                    ));
                }
                rebind(&state.map, |map| map.zoom = *zoom)
            }

            Action::MapHighlight(highlight) => {
                rebind(&state.map, |map| map.highlight = highlight.clone())
            }
        };

        Ok(StateTree {
            map,
            ..state.clone()
        })
    }
}

fn require_name(action: ActionKind, name: &str) -> Result<&str, ReduceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ReduceError::invalid(action, "name is empty"));
    }
    Ok(trimmed)
}
