//! Database error type

/// SQLSTATE class for data exceptions (`22007` invalid datetime format,
/// `22008` datetime field overflow, ...)
const DATA_EXCEPTION_CLASS: &str = "22";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// True when the pool could not hand out a connection in time.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::PoolTimedOut))
    }

    /// The store's message when it refused a bound value as bad input.
    ///
    /// Date filters are the only caller text bound into commit queries, so
    /// a data exception there means a filter did not cast to `timestamptz`.
    pub fn rejected_input(&self) -> Option<&str> {
        match self {
            Self::Sqlx(sqlx::Error::Database(e))
                if e.code().is_some_and(|code| is_data_exception(&code)) =>
            {
                Some(e.message())
            }
            _ => None,
        }
    }
}

fn is_data_exception(code: &str) -> bool {
    code.starts_with(DATA_EXCEPTION_CLASS)
}
