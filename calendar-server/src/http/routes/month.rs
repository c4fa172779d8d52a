//! Month view endpoint - drives the calendar grid

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::CalendarRepo;
use crate::http::error::{ApiError, Operation};
use crate::http::extractors::ValidMonth;
use crate::http::server::AppState;
use crate::models::DaySummary;

/// GET /api/month?year=&month= - per-day counts, ascending by date_key
async fn month(
    State(state): State<Arc<AppState>>,
    ValidMonth(month): ValidMonth,
) -> Result<Json<Vec<DaySummary>>, ApiError> {
    let days = CalendarRepo::new(&state.pool)
        .month(month)
        .await
        .map_err(|e| ApiError::database(Operation::Month, e))?;

    tracing::debug!(
        year = month.year(),
        month = month.month(),
        days = days.len(),
        "month loaded"
    );
    Ok(Json(days))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/month", get(month))
}
