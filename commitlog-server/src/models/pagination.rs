//! Pagination types

use serde::Serialize;

use super::ValidationError;

/// Maximum items per page
pub const MAX_LIMIT: u32 = 100;

/// Default items per page
pub const DEFAULT_LIMIT: u32 = 10;

/// Default page number
pub const DEFAULT_PAGE: u32 = 1;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page (1..=100)
    pub limit: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page must be at least 1
    /// - Limit must be within 1..=100
    pub fn new(page: i64, limit: i64) -> Result<Self, ValidationError> {
        if page < 1 || limit < 1 {
            return Err(ValidationError::NonPositivePagination);
        }
        if limit > i64::from(MAX_LIMIT) {
            return Err(ValidationError::LimitTooLarge { max: MAX_LIMIT });
        }

        Ok(Self {
            page,
            limit: limit as u32,
        })
    }

    /// Build pagination from raw query-string values.
    ///
    /// Missing or non-integer values fall back to the defaults (page 1,
    /// limit 10); integers that parse but are out of range are errors.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Result<Self, ValidationError> {
        let page = parse_or(page, DEFAULT_PAGE);
        let limit = parse_or(limit, DEFAULT_LIMIT);
        Self::new(page, limit)
    }

    /// Calculate SQL OFFSET value: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(i64::from(self.limit))
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: i64::from(DEFAULT_PAGE),
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_or(raw: Option<&str>, default: u32) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(i64::from(default))
}

/// One page of results plus the total across all pages
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Pagination that produced this page
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Calculate total number of pages: `ceil(total / limit)`.
    pub fn total_pages(&self) -> i64 {
        let limit = self.pagination.limit();
        (self.total.max(0) + limit - 1) / limit
    }

    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        self.pagination.page < self.total_pages()
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.pagination.page > 1
    }

    /// Pagination metadata for the response body.
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            total: self.total,
            page: self.pagination.page,
            limit: self.pagination.limit,
            total_pages: self.total_pages(),
            has_next_page: self.has_next(),
            has_prev_page: self.has_prev(),
        }
    }
}

/// Pagination metadata as serialized in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: u32,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}
