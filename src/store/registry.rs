//! Root reducer: the dispatch table combining all slice reducers.

use std::collections::BTreeMap;

use crate::detail::DetailReducer;
use crate::map::MapReducer;
use crate::mvi::{Action, ActionKind, ReduceError, ReducerFn, SliceReducer};
use crate::page::PageReducer;
use crate::search::SearchReducer;
use crate::state::{Slice, StateTree};
use crate::straatbeeld::StraatbeeldReducer;

/// Reducers keyed by action kind.
///
/// For one kind, entries are ordered by [`Slice`] and then by registration
/// order within a slice. That order is the order they run in.
#[derive(Clone, Default)]
pub struct ReducerRegistry {
    table: BTreeMap<ActionKind, Vec<(Slice, ReducerFn)>>,
}

impl ReducerRegistry {
    /// An empty registry; every action is unmatched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every slice reducer of the application.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register_slice::<StraatbeeldReducer>()
            .register_slice::<MapReducer>()
            .register_slice::<SearchReducer>()
            .register_slice::<DetailReducer>()
            .register_slice::<PageReducer>();
        registry
    }

    /// Register one reducer for one action kind.
    pub fn register(&mut self, slice: Slice, kind: ActionKind, reducer: ReducerFn) -> &mut Self {
        let entries = self.table.entry(kind).or_default();
        let position = entries.partition_point(|(existing, _)| *existing <= slice);
        entries.insert(position, (slice, reducer));
        self
    }

    /// Register a slice reducer for every kind it handles.
    pub fn register_slice<R: SliceReducer>(&mut self) -> &mut Self {
        for kind in R::handles() {
            self.register(R::SLICE, *kind, R::reduce);
        }
        self
    }

    pub fn handles(&self, kind: ActionKind) -> bool {
        self.table.get(&kind).is_some_and(|entries| !entries.is_empty())
    }

    /// Slices that respond to `kind`, in application order.
    pub fn slices_for(&self, kind: ActionKind) -> Vec<Slice> {
        self.table
            .get(&kind)
            .map(|entries| entries.iter().map(|(slice, _)| *slice).collect())
            .unwrap_or_default()
    }

    /// Run every reducer registered for the action, threading the tree.
    ///
    /// Returns `Ok(None)` when nothing is registered for the action's kind.
    /// The first error aborts the chain; the caller still holds the input.
    pub fn reduce(&self, state: &StateTree, action: &Action) -> Result<Option<StateTree>, ReduceError> {
        let kind = action.kind();
        let Some(entries) = self.table.get(&kind).filter(|entries| !entries.is_empty()) else {
            return Ok(None);
        };

        let mut current = state.clone();
        for (slice, reducer) in entries {
            current = reducer(&current, action)?;
            tracing::trace!(action = %kind, slice = %slice, "Slice reduced");
        }

        Ok(Some(current))
    }
}

impl std::fmt::Debug for ReducerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, entries) in &self.table {
            let slices: Vec<Slice> = entries.iter().map(|(slice, _)| *slice).collect();
            map.entry(kind, &slices);
        }
        map.finish()
    }
}
