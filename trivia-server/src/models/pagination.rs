//! Pagination over the question listing
//!
//! The listing endpoint serves fixed-size pages of 10 questions. Requesting
//! a page past the end of the data is a client error at the HTTP layer, so
//! the repository reports the slice as-is and lets the handler decide.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Fixed number of questions per page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Validated pagination parameters (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    /// Create pagination from a 1-indexed page number.
    ///
    /// Page 0 is malformed input, not an empty page.
    pub fn new(page: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidFormat {
                field: "page",
                reason: "must be a positive integer",
            });
        }
        Ok(Self { page })
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * QUESTIONS_PER_PAGE as i64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Paginated result set from a repository
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items for the current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
}

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

impl PageParams {
    /// Resolve to validated pagination, defaulting to the first page.
    pub fn resolve(&self) -> Result<Pagination, ValidationError> {
        Pagination::new(self.page.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1).unwrap();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 10);

        let p = Pagination::new(2).unwrap();
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(7).unwrap();
        assert_eq!(p.offset(), 60);
    }

    #[test]
    fn page_zero_rejected() {
        let err = Pagination::new(0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { field: "page", .. }
        ));
    }

    #[test]
    fn params_default_to_first_page() {
        let params = PageParams { page: None };
        assert_eq!(params.resolve().unwrap(), Pagination { page: 1 });

        let params = PageParams { page: Some(3) };
        assert_eq!(params.resolve().unwrap().offset(), 20);
    }
}
