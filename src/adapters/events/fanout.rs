//! Generic fan-out point: publish to N subscribers, isolate failures.
//!
//! Replaces the ambient platform event bus with an explicit observer list.
//! An emit snapshots the current subscriber set and delivers to each exactly
//! once; a failing listener is logged (diagnostics mode only) and never
//! blocks delivery to the rest.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::ports::{FnListener, Listener};

/// Explicitly constructed fan-out point for payloads of type `P`.
///
/// Listener registration uses set semantics keyed by `Arc` identity:
/// subscribing the same `Arc` twice leaves a single registration. The
/// listener set lives as long as the fan-out; unsubscribing is the caller's
/// responsibility and nothing is cleaned up automatically.
pub struct Fanout<P: ?Sized> {
    registry: Arc<ListenerRegistry<P>>,
    diagnostics: bool,
}

struct ListenerRegistry<P: ?Sized> {
    entries: RwLock<Vec<Entry<P>>>,
    next_id: AtomicU64,
}

struct Entry<P: ?Sized> {
    id: u64,
    listener: Arc<dyn Listener<P>>,
}

/// Capability to remove exactly one registration from a fan-out point.
///
/// Dropping the handle without calling [`unsubscribe`](Self::unsubscribe)
/// leaves the listener registered.
pub struct Subscription {
    cancel: Box<dyn FnOnce() + Send>,
}

impl Subscription {
    /// Removes the registration this handle was returned for.
    ///
    /// An emit already iterating when this runs may still deliver to the
    /// removed listener once (best-effort, single-thread race is benign).
    pub fn unsubscribe(self) {
        (self.cancel)();
    }
}

impl<P: ?Sized + 'static> ListenerRegistry<P> {
    fn remove(&self, id: u64) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|entry| entry.id != id);
    }
}

impl<P: ?Sized + 'static> Fanout<P> {
    /// Creates an empty fan-out point.
    pub fn new(diagnostics: bool) -> Self {
        Self {
            registry: Arc::new(ListenerRegistry {
                entries: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
            diagnostics,
        }
    }

    /// Registers a listener and returns its unsubscribe capability.
    ///
    /// Registering the same `Arc` again is idempotent; the returned handle
    /// then cancels the existing registration.
    pub fn subscribe(&self, listener: Arc<dyn Listener<P>>) -> Subscription {
        let data_ptr = Arc::as_ptr(&listener) as *const ();
        let id = {
            let mut entries = self
                .registry
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let existing = entries
                .iter()
                .find(|entry| Arc::as_ptr(&entry.listener) as *const () == data_ptr)
                .map(|entry| entry.id);
            match existing {
                Some(id) => id,
                None => {
                    let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
                    entries.push(Entry { id, listener });
                    id
                }
            }
        };

        let registry = Arc::downgrade(&self.registry);
        Subscription {
            cancel: Box::new(move || {
                if let Some(registry) = Weak::upgrade(&registry) {
                    registry.remove(id);
                }
            }),
        }
    }

    /// Registers a closure as a listener.
    pub fn subscribe_fn<F>(&self, name: &'static str, callback: F) -> Subscription
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(FnListener::new(name, callback)))
    }

    /// Delivers a payload to every currently-registered listener.
    ///
    /// Each listener is invoked exactly once per emit. Listener errors are
    /// contained: logged at debug level in diagnostics mode, silently
    /// dropped otherwise. Never propagates an error to the emitter.
    pub fn emit(&self, payload: &P) {
        let listeners: Vec<Arc<dyn Listener<P>>> = {
            let entries = self
                .registry
                .entries
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            entries
                .iter()
                .map(|entry| Arc::clone(&entry.listener))
                .collect()
        };

        for listener in listeners {
            if let Err(e) = listener.on_event(payload) {
                if self.diagnostics {
                    tracing::debug!(
                        listener = listener.name(),
                        error = %e,
                        "listener failed during fan-out"
                    );
                }
            }
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
