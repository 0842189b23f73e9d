//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use atlas_state::config::StoreConfig;
use atlas_state::state::{default_state, Camera, Location, PanoramaId, StateTree};
use atlas_state::store::{ReducerRegistry, Store};
use atlas_state::straatbeeld::{PanoramaTarget, ShowStraatbeeldPayload, StraatbeeldState};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Default tree with a shown panorama: id 1, camera fully set.
pub fn state_with_straatbeeld() -> StateTree {
    StateTree {
        straatbeeld: Some(Arc::new(StraatbeeldState {
            target: PanoramaTarget::Id(PanoramaId(1)),
            camera: Camera {
                location: Some(Location::new(51.0, 4.0)),
                heading: Some(1.0),
                pitch: Some(2.0),
                fov: Some(3.0),
            },
            is_loading: false,
        })),
        ..default_state()
    }
}

/// Same as [`state_with_straatbeeld`] with a different panorama target.
pub fn state_with_target(target: PanoramaTarget) -> StateTree {
    let mut state = state_with_straatbeeld();
    let straatbeeld = state.straatbeeld.take().expect("fixture has straatbeeld");
    state.straatbeeld = Some(Arc::new(StraatbeeldState {
        target,
        ..StraatbeeldState::clone(&straatbeeld)
    }));
    state
}

/// Same as [`state_with_straatbeeld`] with another camera.
pub fn state_with_camera(camera: Camera) -> StateTree {
    let mut state = state_with_straatbeeld();
    let straatbeeld = state.straatbeeld.take().expect("fixture has straatbeeld");
    state.straatbeeld = Some(Arc::new(StraatbeeldState {
        camera,
        ..StraatbeeldState::clone(&straatbeeld)
    }));
    state
}

pub fn show_payload() -> ShowStraatbeeldPayload {
    ShowStraatbeeldPayload {
        id: PanoramaId(98765),
        camera: Camera {
            location: Some(Location::new(51.5, 4.5)),
            heading: Some(7.0),
            pitch: Some(8.0),
            fov: Some(9.0),
        },
        request: None,
    }
}

pub fn store_with(state: StateTree) -> Store {
    Store::new(ReducerRegistry::standard(), state, StoreConfig::default())
}

pub fn store_with_config(config: StoreConfig) -> Store {
    Store::new(ReducerRegistry::standard(), default_state(), config)
}

/// Subscribe a callback that only counts its invocations.
pub fn counting_subscriber(store: &Store) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    count
}

/// Shared log subscribers append to, to check ordering.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}
