//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::CalendarRepo;
use crate::http::error::{ApiError, Operation};
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub db: i64,
}

/// GET /health - round-trips `SELECT 1` through the pool
async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let db = CalendarRepo::new(&state.pool)
        .ping()
        .await
        .map_err(|e| ApiError::database(Operation::Health, e))?;

    Ok(Json(HealthResponse { ok: true, db }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
