use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use sqlx::PgPool;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::generate::clients::TextGenerator;
use crate::features::generate::{routes as generate_routes, GenerateService};
use crate::features::health::routes as health_routes;
use crate::features::resources::{routes as resources_routes, ResourceService};

/// Assemble the full application: feature routes, docs, fallback and layers
pub fn build_router(
    pool: PgPool,
    generator: Arc<dyn TextGenerator>,
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
) -> Router {
    let resource_service = Arc::new(ResourceService::new(pool));
    let generate_service = Arc::new(GenerateService::new(generator));

    let swagger_modifier = SwaggerInfoModifier {
        title: swagger_config.title.clone(),
        version: swagger_config.version.clone(),
        description: swagger_config.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(resources_routes::routes(resource_service))
        .merge(generate_routes::routes(generate_service))
        .merge(health_routes::routes())
        .fallback(middleware::not_found)
        .layer(DefaultBodyLimit::max(app_config.max_request_body_size))
        .layer(middleware::cors_layer(&app_config.cors_allowed_origins));

    middleware::with_request_tracing(router)
}
