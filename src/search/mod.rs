//! Search view slot.

mod reducer;
mod state;

pub use reducer::SearchReducer;
pub use state::SearchState;
