use thiserror::Error;

use crate::mvi::{ActionError, ActionKind, ReduceError};

/// Errors returned by [`Store::dispatch`](super::Store::dispatch).
///
/// Every variant leaves the held state untouched and notifies no one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Reduce(#[from] ReduceError),

    /// Dispatch was called while another dispatch on the same store was
    /// still reducing or notifying.
    #[error("Cannot dispatch {action} while another dispatch is in progress")]
    DispatchInProgress { action: ActionKind },
}
