//! Listener port - contract for in-process event subscribers.
//!
//! A listener is an opaque callback registered with a fan-out point. The
//! fan-out isolates listener failures from each other and from the emitter,
//! so listener errors are reported through [`ListenerError`] rather than by
//! panicking.

use std::fmt;

/// Error raised by a listener while handling a delivery.
///
/// Delivery errors never propagate to the emitter or to sibling listeners;
/// they are logged (diagnostics mode only) and dropped.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    /// Creates a listener error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handler for payloads delivered by a fan-out point.
///
/// Implementations should be:
/// - **Quick** - delivery is synchronous on the emitting thread
/// - **Isolated** - an error from one listener never affects another
pub trait Listener<P: ?Sized>: Send + Sync {
    /// Handle a delivered payload.
    fn on_event(&self, payload: &P) -> Result<(), ListenerError>;

    /// Listener name for diagnostics logging.
    fn name(&self) -> &'static str {
        "anonymous"
    }
}

/// Adapts a plain closure into a [`Listener`].
///
/// # Example
///
/// ```ignore
/// let listener = FnListener::new("banner", |message: &str| {
///     show_banner(message);
/// });
/// ```
pub struct FnListener<F> {
    name: &'static str,
    callback: F,
}

impl<F> FnListener<F> {
    /// Wraps a closure under the given diagnostics name.
    pub fn new(name: &'static str, callback: F) -> Self {
        Self { name, callback }
    }
}

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").field("name", &self.name).finish()
    }
}

impl<P: ?Sized, F> Listener<P> for FnListener<F>
where
    F: Fn(&P) + Send + Sync,
{
    fn on_event(&self, payload: &P) -> Result<(), ListenerError> {
        (self.callback)(payload);
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
