use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor whose rejections use the error envelope
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(AppJsonRejection)
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let error = match self.0 {
            JsonRejection::JsonSyntaxError(_) => {
                AppError::BadRequest("Request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => AppError::BadRequest(
                "Request body must be sent as application/json".to_string(),
            ),
            JsonRejection::JsonDataError(err) => AppError::BadRequest(format!(
                "Request body has an unexpected shape: {}",
                err.body_text()
            )),
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                AppError::PayloadTooLarge("Request body exceeds the size limit".to_string())
            }
            other => AppError::BadRequest(format!(
                "Failed to read request body: {}",
                other.body_text()
            )),
        };

        error.into_response()
    }
}
