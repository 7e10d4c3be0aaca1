//! Razorpay checkout gateway adapters.
//!
//! Only the mock is shipped here; the real checkout surface is installed by
//! the host environment and consumed through the `CheckoutGateway` port.

mod mock_gateway;

pub use mock_gateway::{MethodCall, MockCheckoutGateway};
