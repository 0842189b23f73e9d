//! Reducer for the panorama slice.

use std::sync::Arc;

use crate::mvi::{Action, ActionKind, ReduceError, SliceReducer};
use crate::state::{Camera, Slice, StateTree};

use super::payload::{PanoramaTarget, ShowStraatbeeldPayload};
use super::state::StraatbeeldState;

/// Reducer for panorama fetch/show transitions.
///
/// Entering a search, detail or page view drops the panorama altogether.
pub struct StraatbeeldReducer;

impl SliceReducer for StraatbeeldReducer {
    const SLICE: Slice = Slice::Straatbeeld;

    fn handles() -> &'static [ActionKind] {
        &[
            ActionKind::FetchStraatbeeld,
            ActionKind::ShowStraatbeeld,
            ActionKind::ShowSearchResultsByQuery,
            ActionKind::ShowSearchResultsByClick,
            ActionKind::FetchDetail,
            ActionKind::ShowPage,
        ]
    }

    fn reduce(state: &StateTree, action: &Action) -> Result<StateTree, ReduceError> {
        match action {
            Action::FetchStraatbeeld(target) => fetch(state, *target),
            Action::ShowStraatbeeld(payload) => show(state, payload),
            Action::ShowSearchResultsByQuery(_)
            | Action::ShowSearchResultsByClick(_)
            | Action::FetchDetail(_)
            | Action::ShowPage(_) => Ok(StateTree {
                straatbeeld: None,
                ..state.clone()
            }),
            other => Err(Self::mismatch(other)),
        }
    }
}

fn previous_camera(state: &StateTree) -> Camera {
    state
        .straatbeeld
        .as_ref()
        .map(|straatbeeld| straatbeeld.camera)
        .unwrap_or_default()
}

fn fetch(state: &StateTree, target: PanoramaTarget) -> Result<StateTree, ReduceError> {
    if let PanoramaTarget::Location(location) = target {
        if !location.is_valid() {
            return Err(ReduceError::invalid(
                ActionKind::FetchStraatbeeld,
                format!("location {} is out of range", location),
            ));
        }
    }

    let previous = previous_camera(state);

    // Orientation survives the transition, the viewpoint never does.
    let camera = Camera {
        location: None,
        heading: previous.heading,
        pitch: previous.pitch,
        fov: previous.fov,
    };

    Ok(StateTree {
        straatbeeld: Some(Arc::new(StraatbeeldState {
            target,
            camera,
            is_loading: true,
        })),
        ..state.clone()
    })
}

fn show(state: &StateTree, payload: &ShowStraatbeeldPayload) -> Result<StateTree, ReduceError> {
    if let Some(field) = payload.camera.invalid_field() {
        return Err(ReduceError::invalid(
            ActionKind::ShowStraatbeeld,
            format!("camera {} is not a finite number", field),
        ));
    }
    if let Some(location) = payload.camera.location.filter(|l| !l.is_valid()) {
        return Err(ReduceError::invalid(
            ActionKind::ShowStraatbeeld,
            format!("camera location {} is out of range", location),
        ));
    }

    let previous = previous_camera(state);

    // A value the user already has wins over the server default.
    let camera = Camera {
        location: payload.camera.location,
        heading: previous.heading.or(payload.camera.heading),
        pitch: previous.pitch.or(payload.camera.pitch),
        fov: previous.fov.or(payload.camera.fov),
    };

    Ok(StateTree {
        straatbeeld: Some(Arc::new(StraatbeeldState {
            target: PanoramaTarget::Id(payload.id),
            camera,
            is_loading: false,
        })),
        ..state.clone()
    })
}
