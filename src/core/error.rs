use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::generate::clients::GenerationError;
use crate::shared::types::ErrorEnvelope;

/// Message returned to callers whenever text generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "An error occurred while generating the response";

#[derive(Debug, Error)]
pub enum AppError {
    /// A read query failed; `message` is the fixed per-route text shown to the caller
    #[error("{message}: {source}")]
    Query {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("No text generated from the model")]
    EmptyCompletion,
}

impl AppError {
    /// Error kind name carried in the envelope's `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Query { .. } => "DatabaseError",
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Generation(_) | AppError::EmptyCompletion => "GenerationError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Query { .. } | AppError::EmptyCompletion => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Generation(e) => e
                .upstream_status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            AppError::Query {
                message,
                ref source,
            } => {
                tracing::error!("Database error ({}): {:?}", message, source);
                message.to_string()
            }
            AppError::BadRequest(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) | AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::Generation(ref e) => {
                tracing::error!("Generation error: {:?}", e);
                GENERATION_FAILED_MESSAGE.to_string()
            }
            AppError::EmptyCompletion => {
                tracing::error!("Generation error: model returned no text");
                GENERATION_FAILED_MESSAGE.to_string()
            }
        };

        let body = Json(ErrorEnvelope::new(kind, message));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_query_error_hides_driver_detail() {
        let (status, body) = envelope_of(AppError::Query {
            message: "Failed to fetch notes",
            source: sqlx::Error::Protocol("secret driver detail".to_string()),
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "DatabaseError");
        assert_eq!(body["message"], "Failed to fetch notes");
        assert!(!body.to_string().contains("secret driver detail"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_payload_too_large_is_413() {
        let (status, body) =
            envelope_of(AppError::PayloadTooLarge("too big".to_string())).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "PayloadTooLarge");
        assert_eq!(body["message"], "too big");
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = envelope_of(AppError::BadRequest("nope".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadRequest");
        assert_eq!(body["message"], "nope");
    }

    #[tokio::test]
    async fn test_generation_error_propagates_upstream_status() {
        let err = AppError::Generation(GenerationError::Status {
            status: 503,
            body: "overloaded".to_string(),
        });
        let (status, body) = envelope_of(err).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "GenerationError");
        assert_eq!(body["message"], GENERATION_FAILED_MESSAGE);
        assert!(!body.to_string().contains("overloaded"));
    }

    #[tokio::test]
    async fn test_generation_error_without_status_is_500() {
        let err = AppError::Generation(GenerationError::Network("reset".to_string()));
        let (status, _) = envelope_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_empty_completion_is_500() {
        let (status, body) = envelope_of(AppError::EmptyCompletion).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], GENERATION_FAILED_MESSAGE);
    }
}
