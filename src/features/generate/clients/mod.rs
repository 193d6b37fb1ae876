pub mod gemini_client;

pub use gemini_client::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failures talking to the text generation service
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Content blocked: {0}")]
    Blocked(String),
}

impl GenerationError {
    /// HTTP status reported by the upstream service, if it reported one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GenerationError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A single-turn text completion capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` as one user message.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}
