//! Store handle: current state, dispatch and subscriptions.
//!
//! All mutation goes through [`Store::dispatch`], which swaps the held
//! `Arc<StateTree>` for the tree returned by the root reducer and then
//! notifies subscribers synchronously. Trees are never edited in place, so
//! a tree obtained from [`Store::get_state`] stays valid and unchanged for
//! as long as the caller keeps it.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use scopeguard::ScopeGuard;
use serde_json::Value;

use super::error::StoreError;
use super::registry::ReducerRegistry;
use crate::config::StoreConfig;
use crate::error::{ErrorRegistry, FaultKind};
use crate::mvi::{Action, ActionKind};
use crate::state::{default_state, StateTree};
use crate::straatbeeld::RequestSeq;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber-{}", self.0)
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The tree was replaced and subscribers were notified.
    Applied(DispatchReport),
    /// No reducer is registered for the action; the tree is unchanged.
    Unmatched,
    /// A panorama response for a superseded fetch was dropped.
    Stale { request: RequestSeq, latest: RequestSeq },
}

impl DispatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    /// Callbacks invoked, including the ones that panicked.
    pub notified: usize,
    /// Callbacks that panicked.
    pub failed: usize,
    /// Sequence number stamped on a panorama fetch.
    pub request: Option<RequestSeq>,
}

type Callback = Arc<dyn Fn() + Send + Sync>;

struct StoreInner {
    state: RwLock<Arc<StateTree>>,
    registry: ReducerRegistry,
    config: StoreConfig,
    subscribers: Mutex<Vec<(SubscriberId, Callback)>>,
    next_subscriber: AtomicU64,
    dispatching: AtomicBool,
    /// 0 until the first panorama fetch.
    latest_request: AtomicU64,
    errors: ErrorRegistry,
}

/// Owner of the current state tree.
///
/// Cloning yields another handle to the same store. Independent stores are
/// created with [`Store::new`]; there is no process-wide instance.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

type DispatchGuard<'a> = ScopeGuard<&'a AtomicBool, fn(&AtomicBool)>;

fn release(flag: &AtomicBool) {
    flag.store(false, Ordering::Release);
}

impl Store {
    pub fn new(registry: ReducerRegistry, initial: StateTree, config: StoreConfig) -> Self {
        let errors = ErrorRegistry::new(config.error_history);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(initial)),
                registry,
                config,
                subscribers: Mutex::new(Vec::new()),
                next_subscriber: AtomicU64::new(1),
                dispatching: AtomicBool::new(false),
                latest_request: AtomicU64::new(0),
                errors,
            }),
        }
    }

    /// Store with every slice reducer, starting from the default tree.
    pub fn with_defaults() -> Self {
        Self::new(
            ReducerRegistry::standard(),
            default_state(),
            StoreConfig::default(),
        )
    }

    /// The current tree. Callers get a shared, read-only reference.
    pub fn get_state(&self) -> Arc<StateTree> {
        Arc::clone(&*self.inner.state.read())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Faults recovered from during dispatch and notification.
    pub fn errors(&self) -> &ErrorRegistry {
        &self.inner.errors
    }

    /// Newest sequence number a panorama response must carry to be applied.
    ///
    /// Advanced by every panorama fetch and by every action that leaves the
    /// panorama view, once a fetch has been issued.
    pub fn latest_request(&self) -> Option<RequestSeq> {
        match self.inner.latest_request.load(Ordering::Acquire) {
            0 => None,
            seq => Some(RequestSeq(seq)),
        }
    }

    /// Apply an action and notify subscribers.
    ///
    /// # Errors
    /// Returns an error if a reducer rejects the payload or if another
    /// dispatch is in progress. State is unchanged and nobody is notified
    /// on error.
    pub fn dispatch(&self, action: Action) -> Result<DispatchOutcome, StoreError> {
        let kind = action.kind();
        let _in_progress = self.enter(kind)?;

        if let Some(outcome) = self.check_stale(&action) {
            return Ok(outcome);
        }

        let current = self.get_state();
        let next = match self.inner.registry.reduce(&current, &action) {
            Ok(Some(next)) => next,
            Ok(None) => {
                tracing::debug!(action = %kind, "No reducer registered, ignoring");
                return Ok(self.unmatched());
            }
            Err(err) => {
                tracing::warn!(action = %kind, error = %err, "Dispatch rejected");
                self.inner
                    .errors
                    .record(FaultKind::Rejected { action: kind }, err.to_string());
                return Err(err.into());
            }
        };

        let request = action.starts_request().then(|| {
            RequestSeq(self.inner.latest_request.fetch_add(1, Ordering::AcqRel) + 1)
        });
        if action.cancels_request() {
            self.cancel_pending_request();
        }

        *self.inner.state.write() = Arc::new(next);

        let (notified, failed) = self.notify();
        tracing::debug!(action = %kind, notified, failed, "Action applied");

        Ok(DispatchOutcome::Applied(DispatchReport {
            notified,
            failed,
            request,
        }))
    }

    /// Dispatch by string name with an untyped payload.
    ///
    /// Unknown names are ignored and never notify subscribers; a known name
    /// with a malformed payload is rejected without touching the state.
    pub fn dispatch_named(&self, name: &str, payload: Value) -> Result<DispatchOutcome, StoreError> {
        match Action::from_name(name, payload) {
            Ok(Some(action)) => self.dispatch(action),
            Ok(None) => {
                tracing::debug!(action = name, "Unknown action, ignoring");
                Ok(DispatchOutcome::Unmatched)
            }
            Err(err) => {
                tracing::warn!(action = name, error = %err, "Dispatch rejected");
                if let Some(kind) = ActionKind::from_name(name) {
                    self.inner
                        .errors
                        .record(FaultKind::Rejected { action: kind }, err.to_string());
                }
                Err(err.into())
            }
        }
    }

    /// Register a callback invoked after every applied dispatch.
    ///
    /// Callbacks take no arguments; they read what they need through
    /// [`Store::get_state`]. A callback registered during a notification is
    /// first called on the next dispatch.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriberId(self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.lock().push((id, Arc::new(callback)));
        tracing::trace!(subscriber = %id, "Subscribed");

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.inner.remove_subscriber(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn enter(&self, action: ActionKind) -> Result<DispatchGuard<'_>, StoreError> {
        let flag = &self.inner.dispatching;
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!(action = %action, "Re-entrant dispatch refused");
            return Err(StoreError::DispatchInProgress { action });
        }
        Ok(scopeguard::guard(flag, release as fn(&AtomicBool)))
    }

    fn check_stale(&self, action: &Action) -> Option<DispatchOutcome> {
        if !self.inner.config.drop_stale_responses {
            return None;
        }
        let request = action.answers_request()?;
        let latest = self.latest_request()?;
        if request >= latest {
            return None;
        }

        tracing::debug!(
            action = %action.kind(),
            request = %request,
            latest = %latest,
            "Dropping response to superseded request"
        );
        Some(DispatchOutcome::Stale { request, latest })
    }

    /// Bump the sequence so responses to earlier fetches become stale.
    fn cancel_pending_request(&self) {
        let cancelled = self
            .inner
            .latest_request
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |seq| {
                (seq > 0).then_some(seq + 1)
            });
        if let Ok(seq) = cancelled {
            tracing::debug!(request = seq, "Pending panorama request cancelled");
        }
    }

    fn unmatched(&self) -> DispatchOutcome {
        if self.inner.config.notify_on_unmatched {
            self.notify();
        }
        DispatchOutcome::Unmatched
    }

    /// Call every subscriber from a snapshot of the list.
    ///
    /// A subscriber removed mid-notification is skipped. A panicking
    /// subscriber is logged and recorded; the rest still run.
    fn notify(&self) -> (usize, usize) {
        let snapshot: Vec<(SubscriberId, Callback)> = self.inner.subscribers.lock().clone();

        let mut notified = 0;
        let mut failed = 0;
        for (id, callback) in snapshot {
            if !self.inner.is_subscribed(id) {
                continue;
            }

            notified += 1;
            if let Err(panic) = panic::catch_unwind(AssertUnwindSafe(|| (*callback)())) {
                failed += 1;
                let message = panic_message(panic.as_ref());
                tracing::error!(subscriber = %id, error = %message, "Subscriber panicked");
                self.inner
                    .errors
                    .record(FaultKind::SubscriberPanic { subscriber: id }, message);
            }
        }

        (notified, failed)
    }
}

impl StoreInner {
    fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.subscribers.lock().iter().any(|(existing, _)| *existing == id)
    }

    fn remove_subscriber(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::trace!(subscriber = %id, "Unsubscribed");
        }
        removed
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.subscriber_count())
            .field("latest_request", &self.latest_request())
            .field("registry", &self.inner.registry)
            .finish()
    }
}

/// Token for one registered callback.
///
/// Dropping it does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    store: Weak<StoreInner>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the callback. Returns false if it was already removed or the
    /// store is gone.
    pub fn unsubscribe(self) -> bool {
        self.store
            .upgrade()
            .is_some_and(|inner| inner.remove_subscriber(self.id))
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "subscriber panicked".to_string()
    }
}
