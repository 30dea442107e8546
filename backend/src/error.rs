//! Application error handling
//!
//! Every failure surfaced by the API, whether caused by bad input or by the
//! store, is rendered the same way: HTTP 200 with a body of
//! `{ "error": "<message>" }`. Callers detect failure by the presence of the
//! `error` key, not by the status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use exercise_tracker_shared::types::ErrorResponse;
use thiserror::Error;
use tracing::{error, warn};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(err) => error!("Internal error: {:?}", err),
            other => warn!("Request failed: {}", other),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::OK, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_ok_with_error_body() {
        let response = ApiError::Validation("username is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["error"], "username is required");
    }

    #[tokio::test]
    async fn test_not_found_error_is_ok_with_error_body() {
        let response = ApiError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_internal_error_exposes_underlying_message() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["error"], "connection refused");
    }
}
