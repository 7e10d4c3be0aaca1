//! Toast dispatcher.
//!
//! Broadcasts short-lived UI notifications without coupling the emitter to
//! specific widgets. Payloads fan out to directly-registered listeners and,
//! when a [`UiEventChannel`] is attached, are bridged onto it under the
//! [`TOAST_EVENT`] name for consumers that multiplex events by name.

use std::sync::Arc;

use crate::adapters::events::{Fanout, Subscription, UiEventChannel};
use crate::domain::{ToastPayload, TOAST_EVENT};
use crate::ports::Listener;

/// Process-wide toast broadcast point.
///
/// Construct one at application start-up and inject it wherever toasts are
/// raised. No emission ever returns an error or panics: with no listeners
/// and no channel attached the dispatch is a silent no-op, and listener
/// failures are contained by the underlying fan-out.
pub struct ToastDispatcher {
    fanout: Fanout<ToastPayload>,
    channel: Option<Arc<UiEventChannel>>,
    diagnostics: bool,
}

impl ToastDispatcher {
    /// Creates a dispatcher with no named-event channel attached.
    pub fn new(diagnostics: bool) -> Self {
        Self {
            fanout: Fanout::new(diagnostics),
            channel: None,
            diagnostics,
        }
    }

    /// Creates a dispatcher that also bridges payloads onto `channel`.
    pub fn with_channel(diagnostics: bool, channel: Arc<UiEventChannel>) -> Self {
        Self {
            fanout: Fanout::new(diagnostics),
            channel: Some(channel),
            diagnostics,
        }
    }

    /// Registers a listener for every dispatched toast.
    pub fn subscribe(&self, listener: Arc<dyn Listener<ToastPayload>>) -> Subscription {
        self.fanout.subscribe(listener)
    }

    /// Registers a closure for every dispatched toast.
    pub fn subscribe_fn<F>(&self, name: &'static str, callback: F) -> Subscription
    where
        F: Fn(&ToastPayload) + Send + Sync + 'static,
    {
        self.fanout.subscribe_fn(name, callback)
    }

    /// Broadcasts a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.dispatch(ToastPayload::success(message));
    }

    /// Broadcasts an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.dispatch(ToastPayload::error(message));
    }

    /// Broadcasts an info toast.
    pub fn info(&self, message: impl Into<String>) {
        self.dispatch(ToastPayload::info(message));
    }

    /// Number of directly-registered listeners.
    pub fn listener_count(&self) -> usize {
        self.fanout.listener_count()
    }

    fn dispatch(&self, payload: ToastPayload) {
        if self.diagnostics {
            tracing::debug!(kind = %payload.kind, message = %payload.message, "toast");
        }

        self.fanout.emit(&payload);

        if let Some(channel) = &self.channel {
            channel.emit(TOAST_EVENT, &payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastKind;
    use std::sync::Mutex;

    fn collecting_dispatcher() -> (ToastDispatcher, Arc<Mutex<Vec<ToastPayload>>>) {
        let dispatcher = ToastDispatcher::new(false);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        // Handle intentionally dropped; the listener stays registered.
        drop(dispatcher.subscribe_fn("collector", move |payload: &ToastPayload| {
            captured.lock().unwrap().push(payload.clone());
        }));
        (dispatcher, seen)
    }

    #[test]
    fn success_reaches_listeners_with_kind_and_message() {
        let (dispatcher, seen) = collecting_dispatcher();

        dispatcher.success("saved");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, ToastKind::Success);
        assert_eq!(seen[0].message, "saved");
    }

    #[test]
    fn each_kind_maps_to_its_constructor() {
        let (dispatcher, seen) = collecting_dispatcher();

        dispatcher.success("a");
        dispatcher.error("b");
        dispatcher.info("c");

        let kinds: Vec<ToastKind> = seen.lock().unwrap().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, [ToastKind::Success, ToastKind::Error, ToastKind::Info]);
    }

    #[test]
    fn dispatch_without_listeners_or_channel_is_a_noop() {
        let dispatcher = ToastDispatcher::new(false);
        dispatcher.success("ok");
        dispatcher.error("x");
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[tokio::test]
    async fn error_bridges_named_envelope_onto_channel() {
        let channel = Arc::new(UiEventChannel::new(false));
        let dispatcher = ToastDispatcher::with_channel(false, Arc::clone(&channel));
        let mut receiver = channel.subscribe();

        dispatcher.error("x");

        let envelope = receiver.recv().await.unwrap();
        assert_eq!(envelope.name, TOAST_EVENT);
        assert_eq!(envelope.detail["kind"], "error");
        assert_eq!(envelope.detail["message"], "x");
    }

    #[tokio::test]
    async fn channel_and_listeners_both_receive() {
        let channel = Arc::new(UiEventChannel::new(false));
        let dispatcher = ToastDispatcher::with_channel(false, Arc::clone(&channel));
        let mut receiver = channel.subscribe();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        drop(dispatcher.subscribe_fn("collector", move |payload: &ToastPayload| {
            captured.lock().unwrap().push(payload.message.clone());
        }));

        dispatcher.info("both");

        assert_eq!(seen.lock().unwrap().as_slice(), ["both"]);
        assert_eq!(receiver.recv().await.unwrap().detail["message"], "both");
    }
}
