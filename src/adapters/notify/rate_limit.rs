//! Rate-limit signal registry.
//!
//! Lets arbitrary UI code learn that a rate limit was hit, independent of
//! which component triggered the limited call. The registry is created empty
//! at start-up, grows and shrinks only through subscribe/unsubscribe, and
//! performs no automatic cleanup; callers own their listener lifecycle.

use std::sync::Arc;

use crate::adapters::events::{Fanout, Subscription};
use crate::ports::Listener;

/// Message used when `notify` is called without an override.
pub const DEFAULT_RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait before trying again.";

/// Process-wide registry of rate-limit listeners.
///
/// Listener registration has set semantics (same `Arc` twice is one
/// registration) and failures are isolated per listener; one failing
/// subscriber never suppresses delivery to the rest.
pub struct RateLimitSignals {
    fanout: Fanout<str>,
}

impl RateLimitSignals {
    /// Creates an empty registry.
    pub fn new(diagnostics: bool) -> Self {
        Self {
            fanout: Fanout::new(diagnostics),
        }
    }

    /// Registers a listener; the returned handle removes exactly it.
    pub fn subscribe(&self, listener: Arc<dyn Listener<str>>) -> Subscription {
        self.fanout.subscribe(listener)
    }

    /// Registers a closure as a listener.
    pub fn subscribe_fn<F>(&self, name: &'static str, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.fanout.subscribe_fn(name, callback)
    }

    /// Notifies every registered listener with the default message.
    pub fn notify(&self) {
        self.notify_with(DEFAULT_RATE_LIMIT_MESSAGE);
    }

    /// Notifies every registered listener with the given message.
    ///
    /// Each listener is invoked exactly once per call.
    pub fn notify_with(&self, message: &str) {
        self.fanout.emit(message);
    }

    /// The fixed default message, so callers need not hardcode it.
    pub fn default_message() -> &'static str {
        DEFAULT_RATE_LIMIT_MESSAGE
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.fanout.listener_count()
    }
}
