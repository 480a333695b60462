//! Course file upload configuration.
//!
//! # Environment Variables
//!
//! - `UPLOAD_COMPENSATE_ON_FAILURE`: Delete a freshly created course when one of
//!   its file uploads fails (default: `true`)
//! - `UPLOAD_MAX_FILE_MB`: Largest accepted PDF, checked before sending (default: `20`)

use crate::parse_env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    pub compensate_on_failure: bool,
    pub max_file_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            compensate_on_failure: true,
            max_file_bytes: 20 * 1024 * 1024,
        }
    }
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            compensate_on_failure: parse_env::<bool>("UPLOAD_COMPENSATE_ON_FAILURE")
                .unwrap_or(defaults.compensate_on_failure),
            max_file_bytes: parse_env::<u64>("UPLOAD_MAX_FILE_MB")
                .map(megabytes)
                .unwrap_or(defaults.max_file_bytes),
        }
    }
}

fn megabytes(mb: u64) -> u64 {
    mb.saturating_mul(1024 * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megabytes() {
        assert_eq!(megabytes(20), UploadConfig::default().max_file_bytes);
        assert_eq!(megabytes(u64::MAX), u64::MAX);
    }
}
