//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS by default, explicit origin list on request
//! - Request IDs and request tracing
//! - Graceful shutdown
//! - JSON error responses
//! - Static front-end as the fallback service

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, Operation};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
