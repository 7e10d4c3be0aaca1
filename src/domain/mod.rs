//! Domain layer - notification payloads and derived subscription state.
//!
//! # Module Structure
//!
//! - `notification` - Toast payloads and the named toast event
//! - `subscription` - Subscription snapshots and derived boolean flags

mod notification;
mod subscription;

pub use notification::{ToastKind, ToastPayload, TOAST_EVENT};
pub use subscription::{
    derive_flags, DerivedSubscriptionFlags, SubscriptionSnapshot, STATUS_CANCELED, STATUS_PAST_DUE,
};
