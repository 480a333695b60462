//! Count cache configuration.
//!
//! This module provides configuration for the client-side count cache
//! loaded from environment variables.

use std::time::Duration;

use tutordesk_config::parse_env;

/// Count cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `COUNT_CACHE_TTL_SECONDS`: How long a count stays fresh (default: `60`)
/// - `COUNT_CACHE_MAX_ENTRIES`: Upper bound on cached counts (default: `256`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time-to-live of a cached count.
    pub ttl: Duration,

    /// Maximum number of distinct (resource, filters) counts kept.
    pub max_entries: u64,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            ttl: parse_env::<u64>("COUNT_CACHE_TTL_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.ttl),
            max_entries: parse_env::<u64>("COUNT_CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.max_entries),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_entries: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_values_fall_back_to_defaults() {
        // SAFETY: no other test in this crate reads the cache variables.
        unsafe {
            std::env::set_var("COUNT_CACHE_TTL_SECONDS", "a minute");
            std::env::set_var("COUNT_CACHE_MAX_ENTRIES", "32");
        }
        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, CacheConfig::default().ttl);
        assert_eq!(config.max_entries, 32);
    }
}
