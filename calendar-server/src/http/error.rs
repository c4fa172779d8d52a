//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Database detail is logged here and never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// The endpoint an error came from; picks the client-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Health,
    Stats,
    Month,
    DateDetail,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Stats => "stats",
            Self::Month => "month",
            Self::DateDetail => "date_detail",
        }
    }

    const fn public_message(self) -> &'static str {
        match self {
            Self::Health => "DB error",
            Self::Stats => "Error fetching stats",
            Self::Month => "Could not load month data",
            Self::DateDetail => "Error loading date details",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    Validation(ValidationError),

    /// Database error (500, logged)
    Database { operation: Operation, source: DbError },
}

impl ApiError {
    pub fn database(operation: Operation, source: DbError) -> Self {
        Self::Database { operation, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            Self::Database { operation, source } => {
                // Log the actual error, return generic message
                tracing::error!(operation = operation.name(), error = %source, "database error");
                let message = operation.public_message();
                let body = match operation {
                    Operation::Health => json!({ "ok": false, "error": message }),
                    _ => json!({ "error": message }),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn db_error() -> DbError {
        DbError::Sqlx(sqlx::Error::PoolTimedOut)
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Missing {
            field: "year or month",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing year or month" })
        );
    }

    #[tokio::test]
    async fn database_error_is_500_without_detail() {
        let response = ApiError::database(Operation::Month, db_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Could not load month data" })
        );
    }

    #[tokio::test]
    async fn health_failure_keeps_ok_flag() {
        let response = ApiError::database(Operation::Health, db_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "DB error" })
        );
    }
}
