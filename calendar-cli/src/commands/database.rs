//! Database connection arguments shared by `serve` and `check`
//!
//! Every flag falls back to the MYSQL* environment variables used by the
//! hosting platform; a `.env` file is loaded before parsing.

use std::fmt;
use std::time::Duration;

use calendar_server::db::pool::{
    DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DEFAULT_MYSQL_PORT,
};
use calendar_server::DbConfig;
use clap::Args;

#[derive(Args, Clone)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(id = "db_host", long = "db-host", env = "MYSQLHOST")]
    pub host: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "MYSQLPORT", default_value_t = DEFAULT_MYSQL_PORT)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "MYSQLUSER")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "MYSQLPASSWORD", default_value = "", hide_env_values = true, hide_default_value = true)]
    pub password: String,

    /// Database name
    #[arg(long = "db-name", env = "MYSQLDATABASE")]
    pub database: String,

    /// Maximum pooled connections
    #[arg(
        long,
        env = "DB_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection
    #[arg(
        long,
        env = "DB_ACQUIRE_TIMEOUT_SECS",
        default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub acquire_timeout_secs: u64,
}

impl DatabaseArgs {
    pub fn to_config(&self) -> DbConfig {
        DbConfig {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

impl fmt::Debug for DatabaseArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reuse the redacting Debug of the pool config
        fmt::Debug::fmt(&self.to_config(), f)
    }
}
