//! Mock checkout gateway for testing.
//!
//! Provides a configurable mock implementation of `CheckoutGateway` for unit
//! and integration tests. Supports:
//! - Call tracking (`open` requests, method log)
//! - Error injection for `open`
//! - Gateway event simulation via `emit`
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned; the real gateway is
//! supplied by the host environment.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ports::{
    CheckoutGateway, CheckoutRequest, GatewayError, GatewayEvent, GatewayEventHandler,
};

/// Mock checkout gateway for testing.
///
/// # Example
///
/// ```ignore
/// let gateway = MockCheckoutGateway::new();
///
/// // Inject errors
/// gateway.set_open_error(GatewayError::OpenFailed("order expired".into()));
///
/// // Simulate gateway events
/// gateway.emit(&GatewayEvent::new(PAYMENT_FAILED, json!({})));
///
/// // Assert in tests
/// assert_eq!(gateway.open_count(), 1);
/// ```
#[derive(Default)]
pub struct MockCheckoutGateway {
    inner: Mutex<MockState>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Requests passed to `open`, in call order.
    opened: Vec<CheckoutRequest>,

    /// Registered handlers by event name.
    handlers: HashMap<String, Vec<Arc<dyn GatewayEventHandler>>>,

    /// Error to return on the next `open` call.
    next_open_error: Option<GatewayError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockCheckoutGateway {
    /// Creates a new mock gateway with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error to return on the next `open` call.
    pub fn set_open_error(&self, error: GatewayError) {
        self.lock().next_open_error = Some(error);
    }

    /// Requests passed to `open`, in call order.
    pub fn opened_requests(&self) -> Vec<CheckoutRequest> {
        self.lock().opened.clone()
    }

    /// Number of `open` calls (successful or not).
    pub fn open_count(&self) -> usize {
        self.lock()
            .call_log
            .iter()
            .filter(|call| call.method == "open")
            .count()
    }

    /// Number of handlers currently registered for an event.
    pub fn handler_count(&self, event: &str) -> usize {
        self.lock()
            .handlers
            .get(event)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// All recorded method calls.
    pub fn call_log(&self) -> Vec<MethodCall> {
        self.lock().call_log.clone()
    }

    /// Simulates the gateway raising an event.
    ///
    /// Synchronously invokes every handler registered for the event's name.
    pub fn emit(&self, event: &GatewayEvent) {
        let handlers: Vec<Arc<dyn GatewayEventHandler>> = self
            .lock()
            .handlers
            .get(&event.name)
            .cloned()
            .unwrap_or_default();

        for handler in handlers {
            handler.handle(event);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.inner
            .lock()
            .expect("MockCheckoutGateway: state lock poisoned")
    }

    fn log(&self, method: &str, args: Vec<String>) {
        self.lock().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }
}

impl CheckoutGateway for MockCheckoutGateway {
    fn open(&self, request: &CheckoutRequest) -> Result<(), GatewayError> {
        self.log("open", vec![request.order_id.clone()]);

        let mut state = self.lock();
        if let Some(error) = state.next_open_error.take() {
            return Err(error);
        }
        state.opened.push(request.clone());
        Ok(())
    }

    fn on(&self, event: &str, handler: Arc<dyn GatewayEventHandler>) {
        self.log("on", vec![event.to_string()]);
        self.lock()
            .handlers
            .entry(event.to_string())
            .or_default()
            .push(handler);
    }

    fn off(&self, event: &str, handler: &Arc<dyn GatewayEventHandler>) {
        self.log("off", vec![event.to_string()]);
        let target = Arc::as_ptr(handler) as *const ();
        if let Some(handlers) = self.lock().handlers.get_mut(event) {
            handlers.retain(|h| Arc::as_ptr(h) as *const () != target);
        }
    }
}
