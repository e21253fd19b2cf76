//! Tracing initialization for the drillcast binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "drillcast=info,drillcast_script=info,drillcast_engine=info";
const VERBOSE_LOG_FILTER: &str = "drillcast=debug,drillcast_script=debug,drillcast_engine=debug";

/// Initialize tracing with stderr output. `RUST_LOG` overrides both
/// built-in filters.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
