//! Derived subscription state.
//!
//! The subscription snapshot is owned by an external provider; this module
//! only projects its raw status string into boolean flags convenient for
//! conditional UI rendering. The projection is a total, deterministic
//! function of the status string and holds no state of its own, so it is
//! recomputed on every read and can never serve a stale value.

use serde::{Deserialize, Serialize};

/// Status value indicating a payment failed but the grace period is running.
pub const STATUS_PAST_DUE: &str = "past_due";

/// Status value indicating the user requested cancellation.
pub const STATUS_CANCELED: &str = "canceled";

/// Point-in-time view of a user's subscription, produced externally.
///
/// `status` is an open string domain: values include `"active"`,
/// `"past_due"`, `"canceled"`, `"trialing"`, and whatever the billing
/// provider adds next. Unrecognized values are not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    /// Raw subscription status from the billing provider.
    pub status: String,
    /// True while the provider is still fetching the subscription.
    pub loading: bool,
    /// True when the subscription currently grants access.
    pub has_active_subscription: bool,
}

impl SubscriptionSnapshot {
    /// Derives the boolean flags for this snapshot.
    ///
    /// Convenience for [`derive_flags`].
    pub fn flags(&self) -> DerivedSubscriptionFlags {
        derive_flags(self)
    }
}

/// Boolean projection of a [`SubscriptionSnapshot`].
///
/// At most one of the status-keyed flags is true for any input, and neither
/// is true unless the status matches exactly. `loading` and
/// `has_active_subscription` are relayed unchanged, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedSubscriptionFlags {
    /// Status is exactly `"past_due"`.
    pub is_past_due: bool,
    /// Status is exactly `"canceled"`.
    pub is_canceled: bool,
    /// Relayed from the snapshot.
    pub loading: bool,
    /// Relayed from the snapshot.
    pub has_active_subscription: bool,
}

/// Projects a snapshot into boolean flags.
///
/// Total over all status strings: unknown values degrade to "no flag set"
/// rather than erroring. No caching; callers re-invoke on every snapshot
/// change.
pub fn derive_flags(snapshot: &SubscriptionSnapshot) -> DerivedSubscriptionFlags {
    DerivedSubscriptionFlags {
        is_past_due: snapshot.status == STATUS_PAST_DUE,
        is_canceled: snapshot.status == STATUS_CANCELED,
        loading: snapshot.loading,
        has_active_subscription: snapshot.has_active_subscription,
    }
}
