//! Bounded log of faults the store recovered from.
//!
//! The store never stops on a bad payload or a panicking subscriber; it logs
//! the fault, records it here and carries on. Hosts read the registry to
//! surface those faults in their own error reporting.

use std::collections::VecDeque;
use std::time::SystemTime;

use parking_lot::Mutex;

use crate::mvi::ActionKind;
use crate::store::SubscriberId;

#[derive(Debug, Clone, PartialEq)]
pub enum FaultKind {
    /// A subscriber callback panicked during notification.
    SubscriberPanic { subscriber: SubscriberId },
    /// A dispatch was rejected and the prior state kept.
    Rejected { action: ActionKind },
}

#[derive(Debug, Clone)]
pub struct StoreFault {
    pub timestamp: SystemTime,
    pub kind: FaultKind,
    pub message: String,
}

/// Ring buffer of the most recent faults, oldest first.
#[derive(Debug)]
pub struct ErrorRegistry {
    capacity: usize,
    entries: Mutex<VecDeque<StoreFault>>,
}

impl ErrorRegistry {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn record(&self, kind: FaultKind, message: impl Into<String>) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(StoreFault {
            timestamp: SystemTime::now(),
            kind,
            message: message.into(),
        });
    }

    pub fn recent(&self) -> Vec<StoreFault> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let registry = ErrorRegistry::new(2);
        for action in [ActionKind::MapZoom, ActionKind::MapPan, ActionKind::ShowPage] {
            registry.record(FaultKind::Rejected { action }, action.as_str());
        }

        let recent = registry.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "MAP_PAN");
        assert_eq!(recent[1].message, "SHOW_PAGE");
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let registry = ErrorRegistry::new(0);
        registry.record(
            FaultKind::Rejected {
                action: ActionKind::MapZoom,
            },
            "zoom",
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let registry = ErrorRegistry::new(4);
        registry.record(
            FaultKind::SubscriberPanic {
                subscriber: SubscriberId(1),
            },
            "boom",
        );
        registry.clear();
        assert!(registry.is_empty());
    }
}
