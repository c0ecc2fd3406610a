//! Command implementations for the commitlog CLI

pub mod check_db;
pub mod db_args;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use check_db::run_check_db;
pub use serve::run_serve;
