//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! ## Notification Ports
//!
//! - `Listener` - Handler registered with an in-process fan-out point
//! - `FnListener` - Closure adapter for opaque callbacks
//!
//! ## External Surfaces
//!
//! - `SubscriptionContext` - Read access to the externally-owned subscription
//! - `CheckoutGateway` - Payment gateway checkout boundary (mock-backed in tests)

mod checkout_gateway;
mod listener;
mod subscription_context;

pub use checkout_gateway::{
    CheckoutGateway, CheckoutRequest, GatewayError, GatewayEvent, GatewayEventHandler,
    CHECKOUT_DISMISSED, PAYMENT_FAILED,
};
pub use listener::{FnListener, Listener, ListenerError};
pub use subscription_context::SubscriptionContext;
