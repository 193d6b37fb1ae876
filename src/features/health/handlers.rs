use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::timestamp_now;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "2026-01-01T00:00:00.000Z")]
    pub timestamp: String,
}

/// Report that the process is up
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: timestamp_now(),
    })
}
