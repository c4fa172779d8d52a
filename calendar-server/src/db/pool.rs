//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. Connection
//! options are assembled from discrete fields, never from a URL string.

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time a request waits for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection settings for the calendar database
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_MYSQL_PORT,
            user: user.into(),
            password: String::new(),
            database: database.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    fn pool_options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

/// Create a pool and open its first connection.
///
/// # Errors
///
/// Returns an error if the database cannot be reached within the
/// acquire timeout.
pub async fn create_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    config
        .pool_options()
        .connect_with(config.connect_options())
        .await
}

/// Create a pool that connects on first use.
///
/// The server starts even while the database is down; `/health`
/// reports the outage instead.
pub fn create_lazy_pool(config: &DbConfig) -> MySqlPool {
    config
        .pool_options()
        .connect_lazy_with(config.connect_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DbConfig::new("db.internal", "calendar", "campus");
        assert_eq!(config.port, 3306);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
        assert!(config.password.is_empty());
    }

    #[test]
    fn debug_redacts_password() {
        let mut config = DbConfig::new("db.internal", "calendar", "campus");
        config.password = "hunter2".into();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        let mut config = DbConfig::new("127.0.0.1", "calendar", "campus");
        config.port = 1;
        let pool = create_lazy_pool(&config);
        assert_eq!(pool.size(), 0);
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p calendar-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = MySqlPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect(&url)
            .await
            .expect("pool creation failed");

        // More tasks than connections: the excess waits for a free slot
        let handles: Vec<_> = (0..25_i64)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i64,) = sqlx::query_as("SELECT CAST(? AS SIGNED)")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i64);
        }
    }
}
