//! Adapters - Implementations of ports and in-process delivery mechanics.
//!
//! ## Event Delivery
//!
//! - `events` - Fan-out primitive and named broadcast channel
//! - `notify` - Toast dispatcher and rate-limit signal registry
//!
//! ## External Surfaces
//!
//! - `subscription` - In-memory subscription context
//! - `razorpay` - Mock checkout gateway (tests only)

pub mod events;
pub mod notify;
pub mod razorpay;
pub mod subscription;

pub use events::{Fanout, Subscription, UiEventChannel, UiEventEnvelope, DEFAULT_CHANNEL_CAPACITY};
pub use notify::{RateLimitSignals, ToastDispatcher, DEFAULT_RATE_LIMIT_MESSAGE};
pub use razorpay::MockCheckoutGateway;
pub use subscription::InMemorySubscriptionContext;
