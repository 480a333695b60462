use std::fs;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{LoggingOptions, init_basic_console_logging};

/// Console logging plus rolling files under `options.log_dir`.
///
/// - `tutordesk.log`: errors only, plain text
/// - `tutordesk.json`: `info` and above as JSON lines with span context
pub fn init_tracing(options: &LoggingOptions) {
    if let Err(e) = fs::create_dir_all(&options.log_dir) {
        init_basic_console_logging(options);
        warn!(
            error = %e,
            log_dir = %options.log_dir.display(),
            "Failed to create log directory, logging to console only"
        );
        return;
    }

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.filter_directive()));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // File layer for errors
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &options.log_dir, "tutordesk.log");

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // JSON file layer for structured logs
    let json_appender =
        RollingFileAppender::new(Rotation::DAILY, &options.log_dir, "tutordesk.json");

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("tutordesk=info,tutordesk_cache=info"));

    let installed = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()
        .is_ok();

    if installed {
        info!(log_dir = %options.log_dir.display(), "Tracing initialized with file logging");
    }
}
