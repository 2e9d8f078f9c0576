use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// JSON events on stdout, filtered by `RUST_LOG` (default `info`).
///
/// Only the first call installs the subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_current_span(true))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(default_filter = DEFAULT_FILTER, "tracing initialized");
    }
}
