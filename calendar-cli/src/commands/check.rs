//! One-shot connectivity check
//!
//! Runs the health and stats queries once and prints them as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use calendar_server::{create_pool, CalendarRepo};

use super::database::DatabaseArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_check(args: CheckArgs) -> Result<()> {
    let db_config = args.db.to_config();

    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}:{}", db_config.host, db_config.port))?;

    let repo = CalendarRepo::new(&pool);
    let db = repo.ping().await.context("Health query failed")?;
    let stats = repo.stats().await.context("Stats query failed")?;

    let report = json!({
        "health": { "ok": true, "db": db },
        "stats": stats
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    pool.close().await;
    Ok(())
}
