//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;
use commitlog_server::{create_pool, probe};

use super::db_args::DbArgs;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Connect once, print the server clock, exit non-zero on failure
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let pool = create_pool(&args.db.pool_config());

    let result = probe(&pool)
        .await
        .with_context(|| format!("Could not reach database at {}", args.db.target()));
    pool.close().await;

    let now = result?;
    println!("✓ Connected to {}", args.db.target());
    println!("  Server time: {}", now.to_rfc3339());
    Ok(())
}
