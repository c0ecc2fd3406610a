//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Dynamic SQL is assembled with `QueryBuilder` and `push_bind` only
//! - Independent reads run concurrently on the shared pool

pub mod commits;

pub use commits::CommitRepo;
