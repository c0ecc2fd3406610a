//! commitlog-server: paginated commit listing over HTTP
//!
//! Serves `GET /api/commits` (page, limit, optional date range) backed by
//! a PostgreSQL `commits` table, plus a dependency-free `GET /health`.

pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;

pub use db::{create_pool, probe, DbError, PoolConfig};
pub use http::{run_server, Environment, ServerConfig};
