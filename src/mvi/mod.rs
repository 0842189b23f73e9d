//! Action/reducer primitives for the application store.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ ReducerRegistry ──→ StateTree ──→ Subscribers
//!    ↑                                             │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: a named event with a typed payload
//! - **Reducer**: pure function `(&StateTree, &Action) -> StateTree`
//! - **SliceState**: immutable slice value, rebuilt copy-on-write

mod action;
mod reducer;
mod state;

pub use action::{Action, ActionError, ActionKind};
pub use reducer::{ReduceError, ReducerFn, SliceReducer};
pub use state::{rebind, SliceState};
