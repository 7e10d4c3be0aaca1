//! Checkout flow.
//!
//! Opens the payment gateway's checkout surface and maps gateway failures to
//! error toasts. The gateway itself is external; tests drive this flow
//! against the mock adapter.

use std::sync::Arc;

use crate::adapters::notify::ToastDispatcher;
use crate::ports::{
    CheckoutGateway, CheckoutRequest, GatewayError, GatewayEvent, GatewayEventHandler,
    PAYMENT_FAILED,
};

/// Toast shown when a checkout attempt fails without a provider message.
const PAYMENT_FAILED_FALLBACK: &str = "Payment failed. Please try again.";

/// Toast shown when the gateway refuses to open at all.
const CHECKOUT_OPEN_FAILED: &str = "Unable to start checkout. Please try again.";

/// Initiates checkout against the gateway and reports failures as toasts.
pub struct CheckoutFlow {
    gateway: Arc<dyn CheckoutGateway>,
    toasts: Arc<ToastDispatcher>,
}

/// An in-flight checkout; holds the failure handler registration.
pub struct CheckoutAttempt {
    gateway: Arc<dyn CheckoutGateway>,
    handler: Arc<dyn GatewayEventHandler>,
}

impl CheckoutAttempt {
    /// Detaches the failure handler from the gateway.
    pub fn close(self) {
        self.gateway.off(PAYMENT_FAILED, &self.handler);
    }
}

struct FailureToast {
    toasts: Arc<ToastDispatcher>,
}

impl GatewayEventHandler for FailureToast {
    fn handle(&self, event: &GatewayEvent) {
        let message = event.description().unwrap_or(PAYMENT_FAILED_FALLBACK);
        self.toasts.error(message);
    }
}

impl CheckoutFlow {
    pub fn new(gateway: Arc<dyn CheckoutGateway>, toasts: Arc<ToastDispatcher>) -> Self {
        Self { gateway, toasts }
    }

    /// Registers a failure handler and opens the checkout overlay.
    ///
    /// On open failure the handler is detached again, an error toast is
    /// raised, and the gateway error is returned to the caller.
    pub fn start(&self, request: &CheckoutRequest) -> Result<CheckoutAttempt, GatewayError> {
        let handler: Arc<dyn GatewayEventHandler> = Arc::new(FailureToast {
            toasts: Arc::clone(&self.toasts),
        });
        self.gateway.on(PAYMENT_FAILED, Arc::clone(&handler));

        if let Err(e) = self.gateway.open(request) {
            self.gateway.off(PAYMENT_FAILED, &handler);
            self.toasts.error(CHECKOUT_OPEN_FAILED);
            return Err(e);
        }

        Ok(CheckoutAttempt {
            gateway: Arc::clone(&self.gateway),
            handler,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::razorpay::MockCheckoutGateway;
    use crate::domain::{ToastKind, ToastPayload};
    use serde_json::json;
    use std::sync::Mutex;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            order_id: "order_abc".to_string(),
            amount: 19900,
            currency: "INR".to_string(),
            description: None,
        }
    }

    fn collecting_toasts() -> (Arc<ToastDispatcher>, Arc<Mutex<Vec<ToastPayload>>>) {
        let toasts = Arc::new(ToastDispatcher::new(false));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        drop(toasts.subscribe_fn("collector", move |payload: &ToastPayload| {
            captured.lock().unwrap().push(payload.clone());
        }));
        (toasts, seen)
    }

    #[test]
    fn start_registers_failure_handler_and_opens() {
        let gateway = Arc::new(MockCheckoutGateway::new());
        let (toasts, seen) = collecting_toasts();
        let flow = CheckoutFlow::new(Arc::clone(&gateway) as _, toasts);

        let attempt = flow.start(&request()).unwrap();

        assert_eq!(gateway.open_count(), 1);
        assert_eq!(gateway.handler_count(PAYMENT_FAILED), 1);
        assert!(seen.lock().unwrap().is_empty());

        attempt.close();
        assert_eq!(gateway.handler_count(PAYMENT_FAILED), 0);
    }

    #[test]
    fn gateway_failure_event_raises_error_toast() {
        let gateway = Arc::new(MockCheckoutGateway::new());
        let (toasts, seen) = collecting_toasts();
        let flow = CheckoutFlow::new(Arc::clone(&gateway) as _, toasts);

        let _attempt = flow.start(&request()).unwrap();
        gateway.emit(&GatewayEvent::new(
            PAYMENT_FAILED,
            json!({"error": {"description": "Card declined"}}),
        ));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, ToastKind::Error);
        assert_eq!(seen[0].message, "Card declined");
    }

    #[test]
    fn failure_event_without_description_uses_fallback() {
        let gateway = Arc::new(MockCheckoutGateway::new());
        let (toasts, seen) = collecting_toasts();
        let flow = CheckoutFlow::new(Arc::clone(&gateway) as _, toasts);

        let _attempt = flow.start(&request()).unwrap();
        gateway.emit(&GatewayEvent::new(PAYMENT_FAILED, json!({})));

        assert_eq!(seen.lock().unwrap()[0].message, PAYMENT_FAILED_FALLBACK);
    }

    #[test]
    fn open_failure_detaches_handler_and_toasts() {
        let gateway = Arc::new(MockCheckoutGateway::new());
        gateway.set_open_error(GatewayError::Unavailable("sdk not loaded".to_string()));
        let (toasts, seen) = collecting_toasts();
        let flow = CheckoutFlow::new(Arc::clone(&gateway) as _, toasts);

        let result = flow.start(&request());

        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
        assert_eq!(gateway.handler_count(PAYMENT_FAILED), 0);
        assert_eq!(seen.lock().unwrap()[0].message, CHECKOUT_OPEN_FAILED);
    }

    #[test]
    fn closed_attempt_stops_receiving_failure_events() {
        let gateway = Arc::new(MockCheckoutGateway::new());
        let (toasts, seen) = collecting_toasts();
        let flow = CheckoutFlow::new(Arc::clone(&gateway) as _, toasts);

        flow.start(&request()).unwrap().close();
        gateway.emit(&GatewayEvent::new(PAYMENT_FAILED, json!({})));

        assert!(seen.lock().unwrap().is_empty());
    }
}
