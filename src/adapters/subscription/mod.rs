//! Subscription context adapters.

mod in_memory;

pub use in_memory::InMemorySubscriptionContext;
