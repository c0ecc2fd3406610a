//! Commit listing request parsing

use serde::Deserialize;

use super::{DateRange, FilterEcho, Pagination, ValidationError};

/// Raw query parameters for `GET /api/commits`.
///
/// Everything is read as a string so that unparsable numbers can fall
/// back to defaults instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Validated per-call listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub pagination: Pagination,
    pub range: DateRange,
    pub filters: FilterEcho,
}

impl PageRequest {
    /// Validate raw parameters.
    ///
    /// Only pagination is checked here; date values are left for the
    /// store to parse. Empty date values count as absent.
    pub fn parse(params: &CommitListParams) -> Result<Self, ValidationError> {
        let pagination = Pagination::from_raw(params.page.as_deref(), params.limit.as_deref())?;

        let range = DateRange::from_raw(
            non_empty(params.start_date.as_deref()),
            non_empty(params.end_date.as_deref()),
        );
        let filters = range.echo();

        Ok(Self {
            pagination,
            range,
            filters,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
