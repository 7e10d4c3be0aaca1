//! SubscriptionContext port - read access to the externally-owned subscription.
//!
//! The subscription itself (fetching, refreshing, persistence) lives outside
//! this crate. Consumers here only need a synchronous snapshot accessor; the
//! flag deriver has no write access and holds no copy of the state.

use crate::domain::SubscriptionSnapshot;

/// Port exposing the current subscription state.
///
/// `snapshot()` must be callable at arbitrary read time and reflect the
/// provider's latest state. Implementations decide how the state is sourced;
/// this crate never mutates it.
pub trait SubscriptionContext: Send + Sync {
    /// Returns the current subscription snapshot.
    fn snapshot(&self) -> SubscriptionSnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SubscriptionContext) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn subscription_context_is_send_sync() {
        fn check<T: SubscriptionContext>() {
            assert_send_sync::<T>();
        }
    }
}
