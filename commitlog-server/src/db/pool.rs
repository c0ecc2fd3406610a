//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits, idle eviction and a
//! bounded wait for a free connection.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::DbError;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Default idle time before a pooled connection is closed.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default bound on waiting for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Connection parameters and pool sizing, read once at startup
#[derive(Clone)]
pub struct PoolConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "postgres".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("idle_timeout", &self.idle_timeout)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl PoolConfig {
    /// Connection options built from parts, so credentials never pass
    /// through URL encoding.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Create a PostgreSQL connection pool.
///
/// Connections are opened lazily, so this never blocks on the database;
/// use [`probe`] to check connectivity. Must be called inside a Tokio
/// runtime.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&PoolConfig::default());
/// probe(&pool).await?;
/// ```
pub fn create_pool(config: &PoolConfig) -> PgPool {
    create_pool_with_options(config.connect_options(), config)
}

/// Create a pool for explicit connect options, sized by `config`.
pub fn create_pool_with_options(options: PgConnectOptions, config: &PoolConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(config.idle_timeout)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options)
}

/// Run a trivial query and return the database server's clock.
pub async fn probe(pool: &PgPool) -> Result<DateTime<Utc>, DbError> {
    let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()").fetch_one(pool).await?;
    Ok(now)
}
