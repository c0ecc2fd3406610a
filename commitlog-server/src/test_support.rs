//! Shared test fixtures
//!
//! Database-backed helpers need `DATABASE_URL`; tests using them are
//! marked `#[ignore = "requires database"]`.
//! Run with: DATABASE_URL=postgres://... cargo test -p commitlog-server -- --ignored

use std::time::Duration;

use std::borrow::Cow;
use std::fmt;

use chrono::{TimeZone, Utc};
use sqlx::error::{DatabaseError, ErrorKind};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::db::pool::{create_pool_with_options, PoolConfig};
use crate::db::DbError;

/// A lazily-connected pool pointing at a closed port; every query fails
/// after a short acquire timeout.
pub fn unreachable_pool() -> PgPool {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("nobody")
        .database("nowhere");

    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy_with(options)
}

/// Error as the store would report it, with a SQLSTATE code
#[derive(Debug)]
struct StoreError {
    code: &'static str,
    message: &'static str,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

impl DatabaseError for StoreError {
    fn message(&self) -> &str {
        self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A `DbError` carrying a store-side error with the given SQLSTATE.
pub fn store_error(code: &'static str, message: &'static str) -> DbError {
    DbError::Sqlx(sqlx::Error::Database(Box::new(StoreError { code, message })))
}

/// A throwaway schema holding a seeded `commits` table
pub struct Seeded {
    admin: PgPool,
    /// Pool whose `search_path` resolves `commits` to the seeded table
    pub pool: PgPool,
    schema: String,
}

impl Seeded {
    pub async fn cleanup(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop schema failed");
    }
}

/// Seed `n` commits one day apart starting 2024-01-01 (`sha000`,
/// `sha001`, ...).
pub async fn seed(n: i64) -> Seeded {
    seed_spaced(n, chrono::Duration::days(1)).await
}

/// Seed `n` commits all stamped 2024-01-01T00:00:00Z.
pub async fn seed_simultaneous(n: i64) -> Seeded {
    seed_spaced(n, chrono::Duration::zero()).await
}

async fn seed_spaced(n: i64, step: chrono::Duration) -> Seeded {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let admin = PgPool::connect(&url).await.expect("connect failed");
    let schema = format!("commitlog_test_{}", uuid::Uuid::new_v4().simple());

    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .expect("create schema failed");
    sqlx::query(&format!(
        "CREATE TABLE {}.commits (
            id SERIAL PRIMARY KEY,
            sha TEXT NOT NULL,
            message TEXT,
            created_at TIMESTAMPTZ NOT NULL
        )",
        schema
    ))
    .execute(&admin)
    .await
    .expect("create table failed");

    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    // Reverse insertion order so ordering must come from the query
    for i in (0..n).rev() {
        sqlx::query(&format!(
            "INSERT INTO {}.commits (sha, message, created_at) VALUES ($1, $2, $3)",
            schema
        ))
        .bind(format!("sha{:03}", i))
        .bind(format!("commit {}", i))
        .bind(base + step * i as i32)
        .execute(&admin)
        .await
        .expect("insert failed");
    }

    let options = url
        .parse::<PgConnectOptions>()
        .expect("invalid DATABASE_URL")
        .options([("search_path", schema.as_str()), ("TimeZone", "UTC")]);
    let pool = create_pool_with_options(options, &PoolConfig::default());

    Seeded {
        admin,
        pool,
        schema,
    }
}
