//! Map slice: layers, viewport, highlighted feature and loading flag.

mod reducer;
mod state;

pub use reducer::MapReducer;
pub use state::{Highlight, MapState, MAX_ZOOM, MIN_ZOOM};
