//! AlgoIRL client notification core.
//!
//! Implements the event fan-out layer behind the app's toast notifications
//! and rate-limit signals, plus the derived subscription state used for
//! conditional rendering. The rendering layer itself lives elsewhere; this
//! crate only carries the dispatch, registry, and derivation contracts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

mod telemetry;

pub use telemetry::init_tracing;
