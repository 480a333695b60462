//! Tutordesk Observability Module
//!
//! Sets up the `tracing` subscriber for the dashboard binary.
//!
//! - Console output always goes to stderr so rendered tables on stdout stay
//!   clean.
//! - With the `observability` feature (default), errors are additionally
//!   written to a daily rolling text file and everything at `info` and above to
//!   a daily rolling JSON file.
//!
//! # Examples
//!
//! ```no_run
//! use tutordesk_observability::{LoggingOptions, init_tracing};
//!
//! init_tracing(&LoggingOptions::from_env());
//! ```

use std::path::PathBuf;

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;

pub use basic_logging::init_basic_console_logging;

/// Logging knobs.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: Level for this application's crates (default: `warn`)
/// - `LOG_DIR`: Directory for rolling log files (default: `storage/logs`)
/// - `RUST_LOG`: Full filter directive, overrides `LOG_LEVEL` when set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_dir: PathBuf::from("storage/logs"),
        }
    }
}

impl LoggingOptions {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }

    /// Raises the level to `debug` (one `-v`) or `trace` (two or more).
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.log_level = "debug".to_string(),
            _ => self.log_level = "trace".to_string(),
        }
        self
    }

    /// Filter directive covering every workspace crate plus noisy dependencies.
    pub fn filter_directive(&self) -> String {
        let level = &self.log_level;
        format!(
            "tutordesk={level},tutordesk_core={level},tutordesk_cache={level},\
             tutordesk_config={level},tutordesk_models={level},\
             reqwest=warn,hyper=warn,hyper_util=warn,h2=warn"
        )
    }
}

/// Installs the global subscriber.
///
/// Uses file logging when the `observability` feature is compiled in and the
/// log directory can be created, console-only logging otherwise.
pub fn init_tracing(options: &LoggingOptions) {
    #[cfg(feature = "observability")]
    {
        logging::init_tracing(options);
    }

    #[cfg(not(feature = "observability"))]
    {
        init_basic_console_logging(options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let options = LoggingOptions::default();
        assert_eq!(options.clone().with_verbosity(0).log_level, "warn");
        assert_eq!(options.clone().with_verbosity(1).log_level, "debug");
        assert_eq!(options.with_verbosity(3).log_level, "trace");
    }

    #[test]
    fn test_filter_directive_mentions_app_crates() {
        let directive = LoggingOptions::default().with_verbosity(1).filter_directive();
        assert!(directive.starts_with("tutordesk=debug,"));
        assert!(directive.contains("reqwest=warn"));
        for krate in ["tutordesk_core", "tutordesk_cache", "tutordesk_config", "tutordesk_models"] {
            assert!(directive.contains(&format!("{}=debug", krate)), "{}", directive);
        }
    }
}
