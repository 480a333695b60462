//! # Tutordesk Cache
//!
//! Client-side caching for Tutordesk.
//!
//! This crate provides:
//! - An injected count cache with TTL expiry and per-resource invalidation
//! - Cache configuration from environment variables
//! - Cache key generation utilities
//!
//! # Example
//!
//! ```ignore
//! use tutordesk_cache::{CacheConfig, CountCache};
//!
//! let cache = CountCache::new(&CacheConfig::from_env());
//!
//! let total = cache
//!     .get_or_fetch("teachers", &filters, || client.count("teachers", &filters))
//!     .await?;
//!
//! // after creating a teacher
//! cache.invalidate_quietly("teachers");
//! ```

pub mod config;
pub mod counts;
pub mod keys;

pub use config::CacheConfig;
pub use counts::{CacheError, CountCache};
pub use keys::hash_filters;
