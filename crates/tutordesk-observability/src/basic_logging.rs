use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::LoggingOptions;

/// Initialize console-only logging.
///
/// Used when the `observability` feature is disabled or file logging could not
/// be set up.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` via [`LoggingOptions`] (default: "warn")
/// - **Filtering**: `RUST_LOG` wins when set; HTTP internals are kept at warn
/// - **Format**: Compact, written to stderr, ANSI colors auto-detected
pub fn init_basic_console_logging(options: &LoggingOptions) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.filter_directive()));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter);

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
