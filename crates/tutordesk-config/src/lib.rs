//! # Tutordesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`api`]: Backend location, timeouts and the optional bearer token
//! - [`upload`]: Course file upload behavior
//!
//! # Example
//!
//! ```ignore
//! use tutordesk_config::{ApiConfig, UploadConfig};
//!
//! let api_config = ApiConfig::from_env();
//! let upload_config = UploadConfig::from_env();
//! ```

pub mod api;
pub mod upload;

pub use api::ApiConfig;
pub use upload::UploadConfig;

/// Reads and parses an environment variable, warning when the value is unusable.
pub fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env() {
        // SAFETY: the keys are only touched by this test.
        unsafe {
            std::env::set_var("TUTORDESK_TEST_PARSE_OK", " 42 ");
            std::env::set_var("TUTORDESK_TEST_PARSE_BAD", "forty-two");
        }
        assert_eq!(parse_env::<u64>("TUTORDESK_TEST_PARSE_OK"), Some(42));
        assert_eq!(parse_env::<u64>("TUTORDESK_TEST_PARSE_BAD"), None);
        assert_eq!(parse_env::<u64>("TUTORDESK_TEST_PARSE_MISSING"), None);
    }
}
