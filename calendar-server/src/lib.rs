//! calendar-server: read-only HTTP API over campus calendar data
//!
//! Serves per-month summaries, per-day detail, global stats and a
//! health check from a MySQL schema keyed by integer `date_key`
//! (`YYYYMMDD`), plus the static front-end that consumes them.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_lazy_pool, create_pool, CalendarRepo, DbConfig, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{DateDetail, DateKey, DaySummary, Stats, ValidationError, YearMonth};
