//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` when set, defaulting to `info`. Safe to
/// call once per process; subsequent calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
