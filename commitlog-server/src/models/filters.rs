//! Date range filters for commit listing
//!
//! Bounds are kept as the caller wrote them and bound as text; the store
//! casts them to `timestamptz`, so any format Postgres accepts works
//! (`2024-01-05`, `2024-01-05 10:00:00 UTC`, `January 5, 2024`, ...).

use serde::Serialize;

/// Inclusive bounds on the commit timestamp column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn from_raw(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_owned),
            end: end.map(str::to_owned),
        }
    }

    /// Filter values to echo back in the response body.
    pub fn echo(&self) -> FilterEcho {
        FilterEcho {
            start_date: self.start.clone(),
            end_date: self.end.clone(),
        }
    }
}

/// Filter values echoed back to the caller exactly as supplied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEcho {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
