use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::generate::handlers;
use crate::features::generate::services::GenerateService;

/// Create routes for the generate feature
pub fn routes(service: Arc<GenerateService>) -> Router {
    Router::new()
        .route("/generate", post(handlers::generate))
        .with_state(service)
}
