//! API error types with IntoResponse
//!
//! Errors are converted to JSON `{"error": ...}` bodies. Clients only ever
//! see the generic message; the underlying cause is logged here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body rejected (400)
    Validation(ValidationError),

    /// Insert failed (500, logged)
    SaveFailed(DbError),

    /// Listing failed (500, logged)
    FetchFailed(DbError),
}

impl ApiError {
    /// Status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
            Self::SaveFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save message"),
            Self::FetchFailed(DbError::Decode(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading data")
            }
            Self::FetchFailed(DbError::Query(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch messages")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::debug!("Rejected submission: {}", e),
            Self::SaveFailed(e) => tracing::error!("DB insert error: {}", e),
            Self::FetchFailed(DbError::Decode(e)) => tracing::error!("Row decode error: {}", e),
            Self::FetchFailed(e) => tracing::error!("DB query error: {}", e),
        }

        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
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

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Syntax {
            reason: "expected value".into(),
        });
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn save_failure_hides_cause() {
        let err = ApiError::SaveFailed(DbError::Query(sqlx::Error::PoolTimedOut));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to save message" }));
    }

    #[tokio::test]
    async fn fetch_failures_keep_distinct_messages() {
        let (status, body) =
            body_json(ApiError::FetchFailed(DbError::Query(sqlx::Error::PoolTimedOut))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch messages" }));

        let decode = sqlx::Error::ColumnNotFound("submitted_at".into());
        let (status, body) = body_json(ApiError::FetchFailed(DbError::Decode(decode))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error reading data" }));
    }
}
