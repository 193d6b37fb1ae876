#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum::Router;
#[cfg(test)]
use sqlx::{postgres::PgSslMode, PgPool};

#[cfg(test)]
use crate::core::config::{AppConfig, DatabaseConfig, SwaggerConfig};
#[cfg(test)]
use crate::features::generate::clients::{GenerationError, TextGenerator};

/// Scripted stand-in for the generation service that records its calls
#[cfg(test)]
pub struct MockTextGenerator {
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

#[cfg(test)]
enum MockOutcome {
    Reply(Option<String>),
    Fail(fn() -> GenerationError),
}

#[cfg(test)]
impl MockTextGenerator {
    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_outcome(MockOutcome::Reply(Some(text.to_string())))
    }

    /// Answers without producing any text
    pub fn silent() -> Self {
        Self::with_outcome(MockOutcome::Reply(None))
    }

    pub fn failing(make_error: fn() -> GenerationError) -> Self {
        Self::with_outcome(MockOutcome::Fail(make_error))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.outcome {
            MockOutcome::Reply(text) => Ok(text.clone()),
            MockOutcome::Fail(make_error) => Err(make_error()),
        }
    }
}

/// Pool aimed at a closed local port; every query fails after a short wait
#[cfg(test)]
pub fn unreachable_pool() -> PgPool {
    let config = DatabaseConfig {
        url: None,
        user: "nobody".to_string(),
        password: "nothing".to_string(),
        host: "127.0.0.1".to_string(),
        port: 1,
        database: "none".to_string(),
        ssl_mode: PgSslMode::Disable,
        max_connections: 1,
        min_connections: 0,
        acquire_timeout_secs: 1,
        idle_timeout_secs: 1,
        max_lifetime_secs: 1,
    };
    crate::core::database::create_lazy_pool(&config).unwrap()
}

/// Pool for the database named by `DATABASE_URL`, used by ignored tests
#[cfg(test)]
pub async fn live_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("failed to connect to DATABASE_URL")
}

/// Full application router backed by an unreachable database
#[cfg(test)]
pub fn test_app(generator: Arc<dyn TextGenerator>) -> Router {
    let app_config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 1024 * 1024,
    };
    let swagger_config = SwaggerConfig {
        title: "StudyHub API".to_string(),
        version: "test".to_string(),
        description: "test".to_string(),
    };

    crate::core::router::build_router(unreachable_pool(), generator, &app_config, &swagger_config)
}
