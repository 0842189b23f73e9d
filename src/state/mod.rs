//! The state tree and the value types shared between slices.

mod tree;
mod types;

pub use tree::{default_state, Slice, StateTree};
pub use types::{Camera, Location, PanoramaId};
