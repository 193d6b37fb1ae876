use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::generate::dtos::{GenerateRequestDto, GenerateResponseDto};
use crate::features::generate::services::GenerateService;
use crate::shared::types::ErrorEnvelope;

/// Generate an answer for a prompt
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequestDto,
    responses(
        (status = 200, description = "Reformatted model output", body = GenerateResponseDto),
        (status = 400, description = "Prompt missing, empty or not a string", body = ErrorEnvelope),
        (status = 500, description = "Generation failed", body = ErrorEnvelope)
    ),
    tag = "generate"
)]
pub async fn generate(
    State(service): State<Arc<GenerateService>>,
    AppJson(dto): AppJson<GenerateRequestDto>,
) -> Result<Json<GenerateResponseDto>> {
    let prompt = dto.prompt()?;
    let text = service.generate(prompt).await?;
    Ok(Json(GenerateResponseDto { text }))
}
