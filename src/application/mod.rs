//! Application layer - wiring and flows built on the ports and adapters.
//!
//! # Module Structure
//!
//! - `notifications` - Start-up wiring of the notification core
//! - `checkout` - Gateway-backed checkout flow with toast feedback
//! - `subscription` - Per-read flag derivation and billing banners

mod checkout;
mod notifications;
mod subscription;

pub use checkout::{CheckoutAttempt, CheckoutFlow};
pub use notifications::{wire_rate_limit_toasts, Notifications};
pub use subscription::{SubscriptionGate, CANCELED_BANNER, PAST_DUE_BANNER};
