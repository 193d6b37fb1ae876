use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::resources::services::ResourceService;
use crate::shared::types::{ErrorEnvelope, Row};

/// List all semesters
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every semester row", body = Vec<Row>),
        (status = 500, description = "Failed to fetch semesters", body = ErrorEnvelope)
    ),
    tag = "resources"
)]
pub async fn list_semesters(
    State(service): State<Arc<ResourceService>>,
) -> Result<Json<Vec<Row>>> {
    Ok(Json(service.list_semesters().await?))
}

/// List the subjects of a semester
#[utoipa::path(
    get,
    path = "/subjects/{sem_key}",
    params(
        ("sem_key" = String, Path, description = "Semester id")
    ),
    responses(
        (status = 200, description = "Subjects of the semester, possibly empty", body = Vec<Row>),
        (status = 500, description = "Failed to fetch subjects for the semester", body = ErrorEnvelope)
    ),
    tag = "resources"
)]
pub async fn list_subjects_by_semester(
    State(service): State<Arc<ResourceService>>,
    Path(sem_key): Path<String>,
) -> Result<Json<Vec<Row>>> {
    Ok(Json(service.list_subjects_by_semester(&sem_key).await?))
}

/// Get the lab manual links of a semester
#[utoipa::path(
    get,
    path = "/lab_manual/{sem_id}",
    params(
        ("sem_id" = String, Path, description = "Semester id")
    ),
    responses(
        (status = 200, description = "Matching semester rows, possibly empty", body = Vec<Row>),
        (status = 500, description = "Failed to fetch lab manuals", body = ErrorEnvelope)
    ),
    tag = "resources"
)]
pub async fn list_lab_manuals(
    State(service): State<Arc<ResourceService>>,
    Path(sem_id): Path<String>,
) -> Result<Json<Vec<Row>>> {
    Ok(Json(service.list_lab_manuals(&sem_id).await?))
}

/// List the question papers of a subject
#[utoipa::path(
    get,
    path = "/subject/papers/{sub_id}",
    params(
        ("sub_id" = String, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Question papers, possibly empty", body = Vec<Row>),
        (status = 500, description = "Failed to fetch question papers", body = ErrorEnvelope)
    ),
    tag = "resources"
)]
pub async fn list_question_papers(
    State(service): State<Arc<ResourceService>>,
    Path(sub_id): Path<String>,
) -> Result<Json<Vec<Row>>> {
    Ok(Json(service.list_question_papers(&sub_id).await?))
}

/// List the notes of a subject ordered by title
#[utoipa::path(
    get,
    path = "/subject/notes/{sub_id}",
    params(
        ("sub_id" = String, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Notes ordered by note_title, possibly empty", body = Vec<Row>),
        (status = 500, description = "Failed to fetch notes", body = ErrorEnvelope)
    ),
    tag = "resources"
)]
pub async fn list_notes(
    State(service): State<Arc<ResourceService>>,
    Path(sub_id): Path<String>,
) -> Result<Json<Vec<Row>>> {
    Ok(Json(service.list_notes(&sub_id).await?))
}
