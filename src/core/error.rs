use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Data access failure surfaced at the request boundary
    #[error("Failed to fetch {resource}: {details}")]
    FetchFailed {
        resource: &'static str,
        details: String,
    },
}

impl AppError {
    /// Folds any server-side failure into `FetchFailed` for `resource`.
    /// Client-facing errors (not found, bad request) pass through untouched.
    pub fn into_fetch_failed(self, resource: &'static str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::BadRequest(_) | AppError::FetchFailed { .. } => self,
            AppError::Database(e) => AppError::FetchFailed {
                resource,
                details: e.to_string(),
            },
            AppError::Internal(details) => AppError::FetchFailed { resource, details },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Database error occurred", Some(e.to_string())),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg, None)),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Bad request", Some(msg)),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error", Some(msg)),
                )
            }
            AppError::FetchFailed { resource, details } => {
                tracing::error!("Error fetching {}: {}", resource, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(format!("Failed to fetch {}", resource), Some(details)),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_has_no_details() {
        let response = AppError::NotFound("Category not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Category not found" }));
    }

    #[tokio::test]
    async fn test_fetch_failed_carries_details() {
        let error = AppError::Database(sqlx::Error::PoolTimedOut).into_fetch_failed("colors");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch colors");
        assert_eq!(
            body["details"],
            sqlx::Error::PoolTimedOut.to_string().as_str()
        );
    }

    #[test]
    fn test_into_fetch_failed_keeps_not_found() {
        let error = AppError::NotFound("Category not found".to_string()).into_fetch_failed("category");
        assert!(matches!(error, AppError::NotFound(ref msg) if msg == "Category not found"));
    }

    #[test]
    fn test_into_fetch_failed_wraps_internal() {
        let error = AppError::Internal("boom".to_string()).into_fetch_failed("category");
        match error {
            AppError::FetchFailed { resource, details } => {
                assert_eq!(resource, "category");
                assert_eq!(details, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
