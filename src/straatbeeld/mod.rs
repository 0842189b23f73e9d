//! Panorama ("straatbeeld") slice.
//!
//! Tracks which panorama is shown or being fetched, the camera looking at
//! it, and whether a fetch is in flight.
//!
//! - `state.rs` - slice value (target + camera + loading flag)
//! - `payload.rs` - FETCH/SHOW payloads and request sequence numbers
//! - `reducer.rs` - transitions (pure, no side effects)

mod payload;
mod reducer;
mod state;

pub use payload::{PanoramaTarget, RequestSeq, ShowStraatbeeldPayload};
pub use reducer::StraatbeeldReducer;
pub use state::StraatbeeldState;
