//! Application state store for the atlas map and panorama viewer.
//!
//! A single [`Store`] holds the whole [`StateTree`]. UI components change it
//! only by dispatching an [`Action`]; pure slice reducers compute the next
//! tree and subscribers are notified to re-read it.

pub mod config;
pub mod detail;
pub mod error;
pub mod logging;
pub mod map;
pub mod mvi;
pub mod page;
pub mod projection;
pub mod search;
pub mod state;
pub mod store;
pub mod straatbeeld;

pub use mvi::{Action, ActionKind};
pub use state::{default_state, StateTree};
pub use store::{DispatchOutcome, Store, StoreError};
