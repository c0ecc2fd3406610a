//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One process-wide pool, passed explicitly through `AppState`
//! - Every caller-supplied value is a bound parameter
//! - Read-only access; the schema is owned elsewhere

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, probe, PoolConfig};
pub use repos::*;
