//! Reducer contract for state slices.

use thiserror::Error;

use super::action::{Action, ActionKind};
use crate::state::{Slice, StateTree};

/// Errors a reducer may return instead of a new tree.
///
/// Any error aborts the whole dispatch: the store keeps its prior tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReduceError {
    /// The payload has the right type but an unusable value.
    #[error("Invalid payload for {action}: {reason}")]
    InvalidPayload { action: ActionKind, reason: String },

    /// A reducer was registered under a kind it does not handle.
    #[error("{slice} reducer does not handle {found}")]
    PayloadMismatch { slice: Slice, found: ActionKind },
}

impl ReduceError {
    pub fn invalid(action: ActionKind, reason: impl Into<String>) -> Self {
        ReduceError::InvalidPayload {
            action,
            reason: reason.into(),
        }
    }
}

/// A registered reducer.
///
/// Plain function pointers: a reducer cannot capture a store handle, so it
/// can never dispatch while reducing.
pub type ReducerFn = fn(&StateTree, &Action) -> Result<StateTree, ReduceError>;

/// Reducer owning one slice of the tree.
///
/// Receives the entire current tree and returns a new one. Only the slices
/// listed in the action's contract may be rebound; everything else is
/// carried over by reference.
pub trait SliceReducer {
    /// The slice this reducer is registered under.
    const SLICE: Slice;

    /// Action kinds this reducer responds to.
    fn handles() -> &'static [ActionKind];

    /// Process an action and return the new tree.
    ///
    /// This must be a pure function with no side effects.
    fn reduce(state: &StateTree, action: &Action) -> Result<StateTree, ReduceError>;

    /// Error for an action outside [`SliceReducer::handles`].
    fn mismatch(action: &Action) -> ReduceError {
        ReduceError::PayloadMismatch {
            slice: Self::SLICE,
            found: action.kind(),
        }
    }
}
