//! Subscription gate.
//!
//! Read-side service translating the external subscription context into
//! flags and banner copy for conditional rendering. Every call re-reads the
//! snapshot and re-derives; nothing is cached, so there is no stale-read
//! risk by construction.

use std::sync::Arc;

use crate::domain::{derive_flags, DerivedSubscriptionFlags};
use crate::ports::SubscriptionContext;

/// Banner shown while a payment is past due.
pub const PAST_DUE_BANNER: &str =
    "Your last payment failed. Update your payment method to keep access.";

/// Banner shown after a cancellation.
pub const CANCELED_BANNER: &str = "Your subscription is canceled. Resubscribe to regain access.";

/// Derives subscription flags on demand from the external context.
pub struct SubscriptionGate {
    context: Arc<dyn SubscriptionContext>,
}

impl SubscriptionGate {
    pub fn new(context: Arc<dyn SubscriptionContext>) -> Self {
        Self { context }
    }

    /// Current flags, derived fresh from the latest snapshot.
    pub fn flags(&self) -> DerivedSubscriptionFlags {
        derive_flags(&self.context.snapshot())
    }

    /// Billing banner for the current status, if one applies.
    ///
    /// Nothing is shown while the snapshot is still loading.
    pub fn banner(&self) -> Option<&'static str> {
        let flags = self.flags();
        if flags.loading {
            return None;
        }
        if flags.is_past_due {
            Some(PAST_DUE_BANNER)
        } else if flags.is_canceled {
            Some(CANCELED_BANNER)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::subscription::InMemorySubscriptionContext;
    use crate::domain::SubscriptionSnapshot;

    fn gate_with_status(status: &str) -> (SubscriptionGate, Arc<InMemorySubscriptionContext>) {
        let context = Arc::new(InMemorySubscriptionContext::new(SubscriptionSnapshot {
            status: status.to_string(),
            loading: false,
            has_active_subscription: false,
        }));
        (SubscriptionGate::new(Arc::clone(&context) as _), context)
    }

    #[test]
    fn past_due_status_yields_past_due_banner() {
        let (gate, _) = gate_with_status("past_due");
        assert!(gate.flags().is_past_due);
        assert_eq!(gate.banner(), Some(PAST_DUE_BANNER));
    }

    #[test]
    fn canceled_status_yields_canceled_banner() {
        let (gate, _) = gate_with_status("canceled");
        assert!(gate.flags().is_canceled);
        assert_eq!(gate.banner(), Some(CANCELED_BANNER));
    }

    #[test]
    fn active_status_yields_no_banner() {
        let (gate, _) = gate_with_status("active");
        assert_eq!(gate.banner(), None);
    }

    #[test]
    fn no_banner_while_loading() {
        let (gate, context) = gate_with_status("past_due");
        context.set_loading(true);
        assert_eq!(gate.banner(), None);
    }

    #[test]
    fn flags_track_context_changes_per_read() {
        let (gate, context) = gate_with_status("past_due");
        assert!(gate.flags().is_past_due);

        context.set_status("canceled");

        let flags = gate.flags();
        assert!(!flags.is_past_due);
        assert!(flags.is_canceled);
    }
}
