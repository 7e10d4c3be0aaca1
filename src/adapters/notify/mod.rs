//! Notification adapters.
//!
//! - `toast` - Toast dispatcher (success/error/info broadcast)
//! - `rate_limit` - Rate-limit signal registry with default message

mod rate_limit;
mod toast;

pub use rate_limit::{RateLimitSignals, DEFAULT_RATE_LIMIT_MESSAGE};
pub use toast::ToastDispatcher;
