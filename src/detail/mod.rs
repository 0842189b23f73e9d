//! Detail view slot: one API object being fetched or shown.

mod payload;
mod reducer;
mod state;

pub use payload::ShowDetailPayload;
pub use reducer::DetailReducer;
pub use state::DetailState;
