//! HTTP server command for the calendar API
//!
//! Runs the calendar HTTP server: JSON endpoints plus the static front-end.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::task::JoinHandle;

use calendar_server::db::{create_lazy_pool, MySqlPool};
use calendar_server::http::{run_server, ServerConfig};
use calendar_server::{CalendarRepo, DbConfig};

use super::database::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Listening port
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the static front-end
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Restrict CORS to these origins (repeatable; default allows any origin)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Ping the database in the background; startup never waits on it.
fn spawn_database_probe(pool: &MySqlPool, config: &DbConfig) -> JoinHandle<()> {
    let pool = pool.clone();
    let host = config.host.clone();
    let database = config.database.clone();

    tokio::spawn(async move {
        match CalendarRepo::new(&pool).ping().await {
            Ok(_) => tracing::info!(host = %host, database = %database, "Database reachable"),
            Err(e) => tracing::warn!(error = %e, "Database not reachable yet; /health will report it"),
        }
    })
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.to_config();
    tracing::debug!(db = ?db_config, "database configuration");

    // Lazy: the server comes up even if the database is still starting
    let pool = create_lazy_pool(&db_config);
    spawn_database_probe(&pool, &db_config);

    if !args.static_dir.is_dir() {
        tracing::warn!(path = %args.static_dir.display(), "Static directory not found; front-end will 404");
    }

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        static_dir: args.static_dir,
        cors_origins: args.cors_origins,
    };

    tracing::info!("Starting calendar server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
