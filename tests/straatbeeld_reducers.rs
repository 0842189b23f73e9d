mod common;

use atlas_state::mvi::{Action, ActionKind, ReduceError};
use atlas_state::state::{default_state, Camera, Location, PanoramaId, StateTree};
use atlas_state::store::{ReducerRegistry, StoreError};
use atlas_state::straatbeeld::PanoramaTarget;
use atlas_state::map::Highlight;
use atlas_state::search::SearchState;
use atlas_state::detail::DetailState;
use common::{show_payload, state_with_camera, state_with_straatbeeld, state_with_target, store_with};
use serde_json::json;
use std::sync::Arc;

fn reduce(state: &StateTree, action: Action) -> StateTree {
    ReducerRegistry::standard()
        .reduce(state, &action)
        .expect("reducer accepted action")
        .expect("action is registered")
}

fn fetch_id(id: u64) -> Action {
    Action::FetchStraatbeeld(PanoramaTarget::Id(PanoramaId(id)))
}

#[test]
fn fetch_by_id() {
    let output = reduce(&default_state(), fetch_id(123));
    let straatbeeld = output.straatbeeld.unwrap();

    assert_eq!(straatbeeld.id(), Some(PanoramaId(123)));
    assert_eq!(straatbeeld.location(), None);
}

#[test]
fn fetch_by_location() {
    let output = reduce(
        &default_state(),
        Action::FetchStraatbeeld(PanoramaTarget::Location(Location::new(52.987, 4.321))),
    );
    let straatbeeld = output.straatbeeld.unwrap();

    assert_eq!(straatbeeld.id(), None);
    assert_eq!(straatbeeld.location(), Some(Location::new(52.987, 4.321)));
}

#[test]
fn fetch_resets_previous_camera_location() {
    let input = state_with_camera(Camera {
        location: Some(Location::new(52.123, 4.789)),
        heading: Some(0.0),
        pitch: Some(0.0),
        fov: Some(60.0),
    });

    let output = reduce(&input, fetch_id(123));
    assert_eq!(output.straatbeeld.unwrap().camera.location, None);
}

#[test]
fn fetch_sets_loading_for_straatbeeld_and_map() {
    let output = reduce(&default_state(), fetch_id(123));

    assert!(output.straatbeeld.unwrap().is_loading);
    assert!(output.map.is_loading);
}

#[test]
fn fetch_remembers_heading_pitch_and_fov() {
    let input = state_with_camera(Camera {
        location: Some(Location::new(52.123, 4.789)),
        heading: Some(100.0),
        pitch: Some(101.0),
        fov: Some(102.0),
    });

    let camera = reduce(&input, fetch_id(123)).straatbeeld.unwrap().camera;
    assert_eq!(camera.heading, Some(100.0));
    assert_eq!(camera.pitch, Some(101.0));
    assert_eq!(camera.fov, Some(102.0));
}

#[test]
fn fetch_removes_map_highlight() {
    let input = reduce(
        &default_state(),
        Action::MapHighlight(Some(Highlight(json!({"some": "object"})))),
    );
    assert!(input.map.highlight.is_some());

    let output = reduce(&input, fetch_id(123));
    assert_eq!(output.map.highlight, None);
}

#[test]
fn fetch_resets_search_detail_and_page() {
    let input = StateTree {
        search: Some(Arc::new(SearchState {
            query: Some("Damrak".into()),
            location: None,
        })),
        detail: Some(Arc::new(DetailState {
            uri: "bag/1".into(),
            is_loading: false,
        })),
        page: Some("somePage".into()),
        ..default_state()
    };

    let output = reduce(&input, fetch_id(123));
    assert_eq!(output.search, None);
    assert_eq!(output.detail, None);
    assert_eq!(output.page, None);
}

#[test]
fn fetch_leaves_input_tree_untouched() {
    let input = state_with_straatbeeld();
    let snapshot = input.clone();

    let _ = reduce(&input, fetch_id(123));
    assert_eq!(input, snapshot);
}

#[test]
fn show_sets_id_and_removes_search_location() {
    let input = state_with_target(PanoramaTarget::Location(Location::new(52.4, 4.52)));

    let output = reduce(&input, Action::ShowStraatbeeld(show_payload()));
    let straatbeeld = output.straatbeeld.unwrap();

    assert_eq!(straatbeeld.id(), Some(PanoramaId(98765)));
    assert_eq!(straatbeeld.location(), None);
}

#[test]
fn show_removes_loading_indicators() {
    let loading = reduce(&state_with_straatbeeld(), fetch_id(98765));
    assert!(loading.map.is_loading);

    let output = reduce(&loading, Action::ShowStraatbeeld(show_payload()));
    assert!(!output.map.is_loading);
    assert!(!output.straatbeeld.unwrap().is_loading);
}

#[test]
fn show_sets_orientation_without_previous_value() {
    let input = state_with_camera(Camera {
        location: Some(Location::new(51.0, 4.0)),
        ..Camera::default()
    });

    let camera = reduce(&input, Action::ShowStraatbeeld(show_payload()))
        .straatbeeld
        .unwrap()
        .camera;
    assert_eq!(camera.heading, Some(7.0));
    assert_eq!(camera.pitch, Some(8.0));
    assert_eq!(camera.fov, Some(9.0));
}

#[test]
fn show_keeps_previous_orientation() {
    let camera = reduce(&state_with_straatbeeld(), Action::ShowStraatbeeld(show_payload()))
        .straatbeeld
        .unwrap()
        .camera;

    assert_eq!(camera.heading, Some(1.0));
    assert_eq!(camera.pitch, Some(2.0));
    assert_eq!(camera.fov, Some(3.0));
}

#[test]
fn show_adopts_payload_camera_location() {
    let camera = reduce(&state_with_straatbeeld(), Action::ShowStraatbeeld(show_payload()))
        .straatbeeld
        .unwrap()
        .camera;
    assert_eq!(camera.location, Some(Location::new(51.5, 4.5)));
}

#[test]
fn fetch_keeps_unrelated_map_fields() {
    let input = reduce(&default_state(), Action::MapZoom(12));
    let output = reduce(&input, fetch_id(123));

    assert_eq!(output.map.zoom, 12);
    assert_eq!(output.map.base_layer, input.map.base_layer);
}

#[test]
fn invalid_location_through_store_keeps_state() {
    let store = store_with(state_with_straatbeeld());
    let before = store.get_state();

    let err = store
        .dispatch(Action::FetchStraatbeeld(PanoramaTarget::Location(
            Location::new(f64::NAN, 4.0),
        )))
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Reduce(ReduceError::InvalidPayload {
            action: ActionKind::FetchStraatbeeld,
            ..
        })
    ));
    assert!(Arc::ptr_eq(&before, &store.get_state()));
}
