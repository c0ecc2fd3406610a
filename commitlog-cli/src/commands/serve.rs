//! HTTP server command
//!
//! Runs the commit listing API until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use commitlog_server::{create_pool, probe, run_server, Environment, ServerConfig};

use super::db_args::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Deployment environment (development or production); production
    /// hides backend error detail from responses
    #[arg(long = "env", env = "APP_ENV", default_value = "development")]
    pub environment: Environment,

    /// Allow any origin via CORS; `false` restricts to localhost frontends
    #[arg(long, env = "CORS_PERMISSIVE", default_value_t = true, action = ArgAction::Set)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool_config = args.db.pool_config();
    tracing::info!(
        target_db = %args.db.target(),
        max_connections = pool_config.max_connections,
        "Creating database pool"
    );
    let pool = create_pool(&pool_config);

    // Startup check is advisory: requests fail individually if the store is down
    match probe(&pool).await {
        Ok(now) => tracing::info!(server_time = %now, "Database connection established"),
        Err(e) => tracing::warn!(
            "Database connectivity check failed for {}: {}",
            args.db.target(),
            e
        ),
    }

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        cors_permissive: args.cors_permissive,
        environment: args.environment,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
