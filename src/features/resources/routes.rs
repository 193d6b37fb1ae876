use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::resources::handlers;
use crate::features::resources::services::ResourceService;

/// Create routes for the resources feature
pub fn routes(service: Arc<ResourceService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_semesters))
        .route("/subjects/{sem_key}", get(handlers::list_subjects_by_semester))
        .route("/lab_manual/{sem_id}", get(handlers::list_lab_manuals))
        .route("/subject/papers/{sub_id}", get(handlers::list_question_papers))
        .route("/subject/notes/{sub_id}", get(handlers::list_notes))
        .with_state(service)
}
