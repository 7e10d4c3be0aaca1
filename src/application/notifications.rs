//! Notification wiring.
//!
//! The dispatcher, registry, and channel are process-wide by requirement:
//! any component must reach them without prop-threading. Rather than ambient
//! globals, the application constructs one [`Notifications`] bundle at
//! start-up and injects the pieces where they are needed.

use std::sync::Arc;

use crate::adapters::events::{Subscription, UiEventChannel};
use crate::adapters::notify::{RateLimitSignals, ToastDispatcher};
use crate::config::RuntimeConfig;

/// The wired notification core: one instance per process.
pub struct Notifications {
    /// Named-event channel consumers subscribe to.
    pub channel: Arc<UiEventChannel>,
    /// Toast broadcast point; bridges onto `channel`.
    pub toasts: Arc<ToastDispatcher>,
    /// Rate-limit signal registry.
    pub rate_limits: Arc<RateLimitSignals>,
}

impl Notifications {
    /// Wires the notification core from runtime configuration.
    pub fn new(config: &RuntimeConfig) -> Self {
        let diagnostics = config.diagnostics();
        let channel = Arc::new(UiEventChannel::with_capacity(
            config.channel_capacity,
            diagnostics,
        ));
        let toasts = Arc::new(ToastDispatcher::with_channel(
            diagnostics,
            Arc::clone(&channel),
        ));
        let rate_limits = Arc::new(RateLimitSignals::new(diagnostics));

        Self {
            channel,
            toasts,
            rate_limits,
        }
    }
}

/// Surfaces every rate-limit signal as an error toast.
///
/// Returns the unsubscribe capability; callers keep it for as long as the
/// bridge should stay active.
pub fn wire_rate_limit_toasts(
    rate_limits: &RateLimitSignals,
    toasts: Arc<ToastDispatcher>,
) -> Subscription {
    rate_limits.subscribe_fn("rate-limit-toast", move |message: &str| {
        toasts.error(message);
    })
}
