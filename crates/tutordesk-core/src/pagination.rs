//! Pagination query parameters for list endpoints.
//!
//! Sent as `?page=&per_page=`. Absent values are omitted so the backend applies
//! its own defaults.
//!
//! # Limits
//!
//! - `per_page` is clamped to the range [1, 100]
//! - `page` is clamped to a minimum of 1

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PaginationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
        .clamped()
    }

    /// Returns a copy with both values forced into their valid ranges.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.map(|p| p.max(1)),
            per_page: self.per_page.map(|l| l.clamp(1, 100)),
        }
    }

    /// Returns the effective page, defaulting to 1.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_nothing() {
        let params = PaginationParams::default();
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({}));
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_new_clamps_boundaries() {
        let params = PaginationParams::new(0, 500);
        assert_eq!(params.page, Some(1));
        assert_eq!(params.per_page, Some(100));

        let params = PaginationParams::new(3, 0);
        assert_eq!(params.per_page, Some(1));
        assert_eq!(params.page(), 3);
    }
}
