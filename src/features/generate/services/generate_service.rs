use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::generate::clients::TextGenerator;
use crate::shared::llm::format_response_text;

/// Relays prompts to the text generator and normalizes the answer
pub struct GenerateService {
    generator: Arc<dyn TextGenerator>,
}

impl GenerateService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate and reformat a completion for an already validated prompt
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let text = self
            .generator
            .generate_text(prompt)
            .await?
            .filter(|t| !t.is_empty())
            .ok_or(AppError::EmptyCompletion)?;

        tracing::debug!("Model returned {} chars", text.len());

        Ok(format_response_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::generate::clients::GenerationError;
    use crate::shared::test_helpers::MockTextGenerator;

    #[tokio::test]
    async fn test_generate_reformats_completion() {
        let generator = Arc::new(MockTextGenerator::replying("**Answer**\n* one\n* two"));
        let service = GenerateService::new(generator.clone());

        let text = service.generate("question").await.unwrap();

        assert_eq!(text, "Answer\n\n- one\n\n- two");
        assert_eq!(generator.calls(), 1);
        assert_eq!(generator.last_prompt().as_deref(), Some("question"));
    }

    #[tokio::test]
    async fn test_generate_empty_completion_fails() {
        for generator in [MockTextGenerator::silent(), MockTextGenerator::replying("")] {
            let service = GenerateService::new(Arc::new(generator));
            let err = service.generate("question").await.unwrap_err();
            assert!(matches!(err, AppError::EmptyCompletion));
        }
    }

    #[tokio::test]
    async fn test_generate_propagates_upstream_failure() {
        let generator = MockTextGenerator::failing(|| GenerationError::Status {
            status: 503,
            body: "unavailable".to_string(),
        });
        let service = GenerateService::new(Arc::new(generator));

        let err = service.generate("question").await.unwrap_err();
        assert!(matches!(err, AppError::Generation(ref e) if e.upstream_status() == Some(503)));
    }
}
