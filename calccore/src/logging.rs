//! Log setup
//!
//! `RUST_LOG` wins when set; otherwise the filter from settings applies.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
