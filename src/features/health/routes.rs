use axum::{routing::get, Router};

use crate::features::health::handlers;

pub fn routes() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}
