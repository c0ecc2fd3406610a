//! Database connection arguments shared by commands
//!
//! Each flag falls back to an environment variable, read once at startup.

use std::time::Duration;

use clap::Args;
use commitlog_server::PoolConfig;

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "postgres")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub db_max_connections: u32,

    /// Close pooled connections idle for this long (milliseconds)
    #[arg(long, env = "DB_IDLE_TIMEOUT_MS", default_value_t = 30_000)]
    pub db_idle_timeout_ms: u64,

    /// Give up waiting for a free connection after this long (milliseconds)
    #[arg(long, env = "DB_CONNECTION_TIMEOUT_MS", default_value_t = 2_000)]
    pub db_connect_timeout_ms: u64,
}

impl DbArgs {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            max_connections: self.db_max_connections,
            idle_timeout: Duration::from_millis(self.db_idle_timeout_ms),
            acquire_timeout: Duration::from_millis(self.db_connect_timeout_ms),
        }
    }

    /// `host:port/database` for log lines and messages
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.db_host, self.db_port, self.db_name)
    }
}
