//! In-process event delivery adapters.
//!
//! - `fanout` - Explicit observer list with per-listener failure isolation
//! - `channel` - Broadcast channel of named envelopes for decoupled consumers

mod channel;
mod fanout;

pub use channel::{UiEventChannel, UiEventEnvelope, DEFAULT_CHANNEL_CAPACITY};
pub use fanout::{Fanout, Subscription};
