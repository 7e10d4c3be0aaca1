//! In-memory subscription context for testing and local wiring.

use std::sync::{PoisonError, RwLock};

use crate::domain::SubscriptionSnapshot;
use crate::ports::SubscriptionContext;

/// Subscription context backed by an in-memory snapshot.
///
/// Stands in for the host application's subscription provider in tests and
/// headless wiring. Mutators replace the snapshot; readers always see the
/// latest value.
pub struct InMemorySubscriptionContext {
    state: RwLock<SubscriptionSnapshot>,
}

impl InMemorySubscriptionContext {
    /// Creates a context holding the given snapshot.
    pub fn new(snapshot: SubscriptionSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Creates a context in the initial loading state.
    pub fn loading() -> Self {
        Self::new(SubscriptionSnapshot {
            status: String::new(),
            loading: true,
            has_active_subscription: false,
        })
    }

    /// Replaces the whole snapshot.
    pub fn set_snapshot(&self, snapshot: SubscriptionSnapshot) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    /// Updates only the status string.
    pub fn set_status(&self, status: impl Into<String>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .status = status.into();
    }

    /// Updates only the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = loading;
    }
}

impl SubscriptionContext for InMemorySubscriptionContext {
    fn snapshot(&self) -> SubscriptionSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
