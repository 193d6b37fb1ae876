use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};

pub const INVALID_PROMPT_MESSAGE: &str = "Invalid prompt. It must be a non-empty string.";

/// Request body for `POST /generate`
///
/// `prompt` is kept as raw JSON so that a missing or non-string value
/// is reported with the same message as an empty one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRequestDto {
    #[serde(default)]
    #[schema(value_type = String, example = "Explain Dijkstra's algorithm")]
    pub prompt: Value,
}

impl GenerateRequestDto {
    /// The prompt, if it is a non-empty string
    pub fn prompt(&self) -> Result<&str> {
        match &self.prompt {
            Value::String(s) if !s.is_empty() => Ok(s),
            _ => Err(AppError::BadRequest(INVALID_PROMPT_MESSAGE.to_string())),
        }
    }
}

/// Reformatted model output
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponseDto {
    pub text: String,
}
