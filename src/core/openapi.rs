use utoipa::{Modify, OpenApi};

use crate::features::generate::{dtos as generate_dtos, handlers as generate_handlers};
use crate::features::health::handlers as health_handlers;
use crate::features::resources::handlers as resources_handlers;
use crate::shared::types::{ErrorEnvelope, Row};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Resources
        resources_handlers::list_semesters,
        resources_handlers::list_subjects_by_semester,
        resources_handlers::list_lab_manuals,
        resources_handlers::list_question_papers,
        resources_handlers::list_notes,
        // Generate
        generate_handlers::generate,
        // Health
        health_handlers::health_check,
    ),
    components(
        schemas(
            // Shared
            Row,
            ErrorEnvelope,
            // Generate
            generate_dtos::GenerateRequestDto,
            generate_dtos::GenerateResponseDto,
            // Health
            health_handlers::HealthResponse,
        )
    ),
    tags(
        (name = "resources", description = "Semesters, subjects, lab manuals, question papers and notes"),
        (name = "generate", description = "Prompt relay to the generative language API"),
        (name = "health", description = "Liveness check"),
    ),
    info(
        title = "StudyHub API",
        version = "0.1.0",
        description = "API documentation for StudyHub",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
