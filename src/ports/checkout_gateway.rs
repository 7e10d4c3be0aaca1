//! CheckoutGateway port - boundary to the external payment gateway.
//!
//! Models the Razorpay-style checkout surface: a gateway object is opened
//! with an order, and emits named events (`payment.failed`, ...) to handlers
//! registered with `on`/`off`. The real gateway is provided by the host
//! environment; this crate ships a mock adapter for tests only.

use std::sync::Arc;

use serde_json::Value;

/// Event emitted when a checkout attempt fails.
pub const PAYMENT_FAILED: &str = "payment.failed";

/// Event emitted when the user dismisses the checkout overlay.
pub const CHECKOUT_DISMISSED: &str = "checkout.dismissed";

/// Request to open a checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Provider order id the checkout settles against.
    pub order_id: String,
    /// Amount in the smallest currency unit (e.g., paise).
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
    /// Optional line shown on the checkout overlay.
    pub description: Option<String>,
}

/// A named event raised by the gateway, with provider-defined detail.
#[derive(Debug, Clone)]
pub struct GatewayEvent {
    /// Event name (e.g., [`PAYMENT_FAILED`]).
    pub name: String,
    /// Provider payload; shape varies per event.
    pub detail: Value,
}

impl GatewayEvent {
    /// Creates an event with the given name and detail.
    pub fn new(name: impl Into<String>, detail: Value) -> Self {
        Self {
            name: name.into(),
            detail,
        }
    }

    /// Extracts the human-readable description from the detail, if present.
    pub fn description(&self) -> Option<&str> {
        self.detail
            .get("error")
            .and_then(|e| e.get("description"))
            .and_then(Value::as_str)
    }
}

/// Handler for gateway events.
pub trait GatewayEventHandler: Send + Sync {
    /// Process a gateway event.
    fn handle(&self, event: &GatewayEvent);
}

/// Port for the payment gateway's checkout surface.
///
/// `off` removes by handler identity (the same `Arc` that was passed to
/// `on`), mirroring the host gateway's reference-based deregistration.
pub trait CheckoutGateway: Send + Sync {
    /// Open the checkout overlay for the given request.
    fn open(&self, request: &CheckoutRequest) -> Result<(), GatewayError>;

    /// Register a handler for a named gateway event.
    fn on(&self, event: &str, handler: Arc<dyn GatewayEventHandler>);

    /// Remove a previously-registered handler for a named gateway event.
    fn off(&self, event: &str, handler: &Arc<dyn GatewayEventHandler>);
}

/// Errors surfaced by the gateway boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// The gateway script/SDK is not installed in this environment.
    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),

    /// The gateway rejected the open request.
    #[error("checkout open failed: {0}")]
    OpenFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Compile-time check that the traits are object-safe
    #[allow(dead_code)]
    fn assert_gateway_object_safe(_: &dyn CheckoutGateway) {}

    #[allow(dead_code)]
    fn assert_handler_object_safe(_: &dyn GatewayEventHandler) {}

    #[test]
    fn event_description_reads_nested_error() {
        let event = GatewayEvent::new(
            PAYMENT_FAILED,
            json!({"error": {"description": "Card declined"}}),
        );
        assert_eq!(event.description(), Some("Card declined"));
    }

    #[test]
    fn event_description_absent_for_flat_detail() {
        let event = GatewayEvent::new(CHECKOUT_DISMISSED, json!({}));
        assert_eq!(event.description(), None);
    }
}
