//! Named UI event channel.
//!
//! Bridges typed payloads onto a broadcast channel of named envelopes so
//! independently-mounted consumers can observe events without a reference to
//! the emitter. This leg is a best-effort bridge: with no receivers attached
//! an emit is a silent no-op, and a lagging receiver skips old events.
//! Consumers that need every delivery register directly with the emitter's
//! fan-out (e.g. `ToastDispatcher::subscribe`) instead.

use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

/// Default broadcast capacity; enough for burst handling without memory bloat.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A named event carried on the channel.
#[derive(Debug, Clone)]
pub struct UiEventEnvelope {
    /// Event name, e.g. `"algoirl:toast"`.
    pub name: String,
    /// Serialized payload.
    pub detail: Value,
}

/// Broadcast channel for named UI events.
///
/// Constructed once at application start-up and handed to emitters;
/// consumers call [`subscribe`](Self::subscribe) to get their own receiver.
/// Emission never fails across this boundary: serialization problems and
/// absent receivers are contained here.
pub struct UiEventChannel {
    sender: broadcast::Sender<UiEventEnvelope>,
    diagnostics: bool,
}

impl UiEventChannel {
    /// Creates a channel with the default capacity.
    pub fn new(diagnostics: bool) -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY, diagnostics)
    }

    /// Creates a channel with the given capacity (minimum 1).
    pub fn with_capacity(capacity: usize, diagnostics: bool) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            diagnostics,
        }
    }

    /// Emits a named event.
    ///
    /// A payload that fails to serialize is dropped (logged in diagnostics
    /// mode); an emit with no attached receivers is a silent no-op.
    pub fn emit<T: Serialize>(&self, name: &str, detail: &T) {
        let detail = match serde_json::to_value(detail) {
            Ok(value) => value,
            Err(e) => {
                if self.diagnostics {
                    tracing::debug!(event = name, error = %e, "dropping unserializable event");
                }
                return;
            }
        };

        // Send only errors when there are no receivers; that is the
        // headless case and intentionally silent.
        let _ = self.sender.send(UiEventEnvelope {
            name: name.to_string(),
            detail,
        });
    }

    /// Attaches a new receiver to the channel.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEventEnvelope> {
        self.sender.subscribe()
    }

    /// Number of currently-attached receivers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::json;
    use tokio::sync::broadcast::error::TryRecvError;

    struct RefusesToSerialize;

    impl Serialize for RefusesToSerialize {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("binary detail"))
        }
    }

    #[tokio::test]
    async fn emit_delivers_named_envelope() {
        let channel = UiEventChannel::new(false);
        let mut receiver = channel.subscribe();

        channel.emit("algoirl:toast", &json!({"kind": "info", "message": "hi"}));

        let envelope = receiver.recv().await.unwrap();
        assert_eq!(envelope.name, "algoirl:toast");
        assert_eq!(envelope.detail["message"], "hi");
    }

    #[test]
    fn emit_without_receivers_is_a_noop() {
        let channel = UiEventChannel::new(false);
        channel.emit("algoirl:toast", &json!({"kind": "success"}));
        assert_eq!(channel.receiver_count(), 0);
    }

    #[tokio::test]
    async fn every_receiver_sees_every_event() {
        let channel = UiEventChannel::new(false);
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();

        channel.emit("test.event", &json!(1));

        assert_eq!(first.recv().await.unwrap().detail, json!(1));
        assert_eq!(second.recv().await.unwrap().detail, json!(1));
    }

    #[test]
    fn unserializable_payload_is_dropped_without_erroring() {
        let channel = UiEventChannel::new(true);
        let mut receiver = channel.subscribe();

        // Returns normally; nothing reaches the receiver.
        channel.emit("algoirl:toast", &RefusesToSerialize);
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Empty)));

        // The channel stays usable afterwards.
        channel.emit("algoirl:toast", &json!({"kind": "info", "message": "ok"}));
        let envelope = receiver.try_recv().unwrap();
        assert_eq!(envelope.detail["message"], "ok");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        // broadcast::channel panics on zero capacity; the constructor guards it.
        let channel = UiEventChannel::with_capacity(0, false);
        channel.emit("test.event", &json!(null));
    }
}
