//! The store: owner of the current state tree.
//!
//! - `registry.rs` - dispatch table from action kind to slice reducers
//! - `store.rs` - state handle, dispatch and subscriber notification
//! - `error.rs` - dispatch errors

mod error;
mod registry;
mod store;

pub use error::StoreError;
pub use registry::ReducerRegistry;
pub use store::{DispatchOutcome, DispatchReport, Store, SubscriberId, Subscription};
