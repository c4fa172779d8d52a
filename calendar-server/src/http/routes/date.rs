//! Date detail endpoint - the side panel for a single day

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::CalendarRepo;
use crate::http::error::{ApiError, Operation};
use crate::http::extractors::ValidDateKey;
use crate::http::server::AppState;
use crate::models::DateDetail;

/// GET /api/date/{date_key}
///
/// Unknown keys return 200 with `date: null` and empty categories.
async fn date_detail(
    State(state): State<Arc<AppState>>,
    ValidDateKey(key): ValidDateKey,
) -> Result<Json<DateDetail>, ApiError> {
    let detail = CalendarRepo::new(&state.pool)
        .date_detail(key)
        .await
        .map_err(|e| ApiError::database(Operation::DateDetail, e))?;

    Ok(Json(detail))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/date/{date_key}", get(date_detail))
}
