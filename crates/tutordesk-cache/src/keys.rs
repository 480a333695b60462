//! Cache key generation utilities.
//!
//! Keys look like `tutordesk:count:{resource}:{filters_hash}` so that every
//! count for one resource shares the prefix `tutordesk:count:{resource}:`.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Prefix for all cache keys.
const CACHE_PREFIX: &str = "tutordesk";

/// Builds a cache key with the standard prefix.
fn build_key(parts: &[&str]) -> String {
    format!("{}:{}", CACHE_PREFIX, parts.join(":"))
}

/// Cache keys for resource counts.
pub mod counts {
    use super::*;

    /// Key for the count of `resource` under the given filters hash.
    pub fn resource(resource: &str, filters_hash: &str) -> String {
        build_key(&["count", resource, filters_hash])
    }

    /// Prefix shared by every count key of `resource`.
    pub fn resource_prefix(resource: &str) -> String {
        format!("{}:", build_key(&["count", resource]))
    }
}

/// Hashes filter parameters into a short, stable key component.
///
/// Filters are hashed through their JSON form so the result does not depend
/// on the process (unlike `DefaultHasher`). Unserializable filters hash to
/// `"all"`.
pub fn hash_filters<T: Serialize>(filters: &T) -> String {
    let Ok(json) = serde_json::to_vec(filters) else {
        return "all".to_string();
    };

    let mut hasher = Sha256::new();
    hasher.update(&json);
    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_key_generation() {
        let key = counts::resource("teachers", "abc");
        assert_eq!(key, "tutordesk:count:teachers:abc");
        assert!(key.starts_with(&counts::resource_prefix("teachers")));
    }

    #[test]
    fn test_prefix_does_not_match_similar_resource() {
        let prefix = counts::resource_prefix("session");
        assert!(!counts::resource("sessions", "x").starts_with(&prefix));
    }

    #[test]
    fn test_hash_filters_consistency() {
        let filters = json!({ "status": "pending", "page": 1 });
        let hash1 = hash_filters(&filters);
        let hash2 = hash_filters(&filters);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 16);
        assert_ne!(hash1, hash_filters(&json!({ "status": "completed" })));
    }
}
