//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;

/// Installs a global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this more
/// than once is harmless; later installs are ignored.
pub fn init_tracing(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
