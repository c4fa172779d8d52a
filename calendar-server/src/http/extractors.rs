//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{DateKey, ValidationError, YearMonth};

/// Extract and validate a date key from path
pub struct ValidDateKey(pub DateKey);

impl<S> FromRequestParts<S> for ValidDateKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Invalid { field: "date_key" }))?;

        // Missing is impossible for a matched path segment; report both as invalid
        let key = DateKey::parse(&raw)
            .map_err(|_| ApiError::Validation(ValidationError::Invalid { field: "date_key" }))?;
        Ok(Self(key))
    }
}

#[derive(Deserialize)]
struct MonthParams {
    year: Option<String>,
    month: Option<String>,
}

/// Extract and validate `?year=&month=`
pub struct ValidMonth(pub YearMonth);

impl<S> FromRequestParts<S> for ValidMonth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<MonthParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::Invalid {
                    field: "year or month",
                })
            })?;

        let month = YearMonth::from_params(params.year.as_deref(), params.month.as_deref())?;
        Ok(Self(month))
    }
}
