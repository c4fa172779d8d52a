//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool, owns nothing
//! - Single query per summary view (correlated counts, no N+1)
//! - Independent lookups run concurrently and fail together

pub mod calendar;

pub use calendar::CalendarRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
