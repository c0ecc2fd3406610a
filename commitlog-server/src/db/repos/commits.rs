//! Commit repository
//!
//! Paginated, optionally date-filtered listing with a matching count.
//! Rows are returned as JSON objects so every column passes through.

use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::db::DbError;
use crate::models::{CommitRecord, DateRange, Paginated, Pagination};

const SELECT_RECORDS: &str = "SELECT to_jsonb(c) AS record FROM commits c";
const SELECT_COUNT: &str = "SELECT COUNT(*) AS total FROM commits c";
const TIMESTAMP_COLUMN: &str = "c.created_at";
const TIE_BREAK_COLUMN: &str = "c.ctid";

/// Commit repository
pub struct CommitRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommitRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of commits ordered by timestamp, plus the total
    /// number of commits matching the same range.
    ///
    /// The page query and the count query run concurrently; if either
    /// fails the whole call fails.
    pub async fn list(
        &self,
        range: &DateRange,
        page: Pagination,
    ) -> Result<Paginated<CommitRecord>, DbError> {
        let mut records = list_query(range, page);
        let mut count = count_query(range);

        let (rows, total) = tokio::try_join!(
            records
                .build_query_scalar::<Json<CommitRecord>>()
                .fetch_all(self.pool),
            count.build_query_scalar::<i64>().fetch_one(self.pool),
        )?;

        Ok(Paginated {
            items: rows.into_iter().map(|Json(record)| record).collect(),
            total,
            pagination: page,
        })
    }
}

/// Page query: filter, ascending timestamp order, `LIMIT`/`OFFSET`.
///
/// Rows sharing a timestamp are ordered by physical row position so that
/// consecutive pages neither repeat nor skip them.
pub fn list_query(range: &DateRange, page: Pagination) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_RECORDS);
    push_range(&mut builder, range);
    builder.push(" ORDER BY ");
    builder.push(TIMESTAMP_COLUMN);
    builder.push(" ASC, ");
    builder.push(TIE_BREAK_COLUMN);
    builder.push(" ASC LIMIT ");
    builder.push_bind(page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
    builder
}

/// Count query with the same filter as [`list_query`] and no pagination.
pub fn count_query(range: &DateRange) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_COUNT);
    push_range(&mut builder, range);
    builder
}

fn push_range(builder: &mut QueryBuilder<'static, Postgres>, range: &DateRange) {
    match (&range.start, &range.end) {
        (Some(start), Some(end)) => {
            builder.push(" WHERE ");
            builder.push(TIMESTAMP_COLUMN);
            builder.push(" BETWEEN ");
            push_timestamp(builder, start);
            builder.push(" AND ");
            push_timestamp(builder, end);
        }
        (Some(start), None) => {
            builder.push(" WHERE ");
            builder.push(TIMESTAMP_COLUMN);
            builder.push(" >= ");
            push_timestamp(builder, start);
        }
        (None, Some(end)) => {
            builder.push(" WHERE ");
            builder.push(TIMESTAMP_COLUMN);
            builder.push(" <= ");
            push_timestamp(builder, end);
        }
        (None, None) => {}
    }
}

/// Bind raw text and let the store parse it as a timestamp.
fn push_timestamp(builder: &mut QueryBuilder<'static, Postgres>, raw: &str) {
    builder.push("CAST(");
    builder.push_bind(raw.to_owned());
    builder.push(" AS timestamptz)");
}
