//! Global stats endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::CalendarRepo;
use crate::http::error::{ApiError, Operation};
use crate::http::server::AppState;
use crate::models::Stats;

/// GET /api/stats - row counts of the tracked tables
async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<Stats>, ApiError> {
    let stats = CalendarRepo::new(&state.pool)
        .stats()
        .await
        .map_err(|e| ApiError::database(Operation::Stats, e))?;

    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/stats", get(stats))
}
