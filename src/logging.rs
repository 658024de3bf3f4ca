//! Centralized logging setup with dual output (stdout + log file)

use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::logging::{DEFAULT_FILTER, LOG_FILE};

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging with dual output: stdout + `netpulse.log`
///
/// Both outputs use the level from `RUST_LOG`, defaulting to "info".
/// Per-tick metric summaries are logged at debug.
///
/// The appender guard is forgotten to keep the file writer alive for the
/// program lifetime.
pub fn init_dual_logging() {
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(env_filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
        .init();

    std::mem::forget(guard);
}
