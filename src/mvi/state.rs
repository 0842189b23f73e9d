//! Base trait for state slices.

use std::fmt::Debug;
use std::sync::Arc;

/// Marker trait for values stored in the state tree.
///
/// Slices should be:
/// - Immutable once shared (rebuilt with [`rebind`], never edited in place)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// Copy-on-write update of a shared slice.
///
/// Clones the slice, applies `edit` to the copy and returns it behind a new
/// `Arc`. The original value stays untouched for whoever still holds it.
pub fn rebind<S, F>(slice: &Arc<S>, edit: F) -> Arc<S>
where
    S: SliceState,
    F: FnOnce(&mut S),
{
    let mut next = (**slice).clone();
    edit(&mut next);
    Arc::new(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        value: u32,
    }

    impl SliceState for Counter {}

    #[test]
    fn rebind_leaves_original_untouched() {
        let original = Arc::new(Counter { value: 1 });
        let next = rebind(&original, |c| c.value = 2);

        assert_eq!(original.value, 1);
        assert_eq!(next.value, 2);
        assert!(!Arc::ptr_eq(&original, &next));
    }
}
