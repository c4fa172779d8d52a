//! Database layer - connection pool and repository
//!
//! # Design Principles
//!
//! - One bounded pool, created at startup and handed to handlers
//! - Read-only: every query is a SELECT
//! - Month summaries come back from a single query (no N+1)
//! - Table names come from a fixed enum, values are always bound

pub mod pool;
pub mod repos;
pub mod row_json;

pub use pool::{create_lazy_pool, create_pool, DbConfig};
pub use sqlx::MySqlPool;
pub use repos::*;
