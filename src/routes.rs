//! Route configuration
//!
//! Centralized route setup. Anything not registered here falls through to
//! the framework's default 404.

use crate::handlers;
use actix_web::{web, HttpResponse};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public pages
        .route("/", web::get().to(handlers::landing_page))
        .route("/client-api", web::get().to(handlers::api_reference))
        // OpenAPI documents served to the viewer
        .route("/specs/{file}", web::get().to(handlers::serve_spec))
        // The portal's own OpenAPI description
        .route("/api/v1/openapi.json", web::get().to(openapi_handler))
        // Health endpoints
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check))
                .route("/health/ready", web::get().to(handlers::readiness_check))
                .route("/health/live", web::get().to(handlers::liveness_check)),
        );
}

/// OpenAPI JSON endpoint
async fn openapi_handler() -> HttpResponse {
    use utoipa::OpenApi;
    HttpResponse::Ok()
        .content_type("application/json")
        .json(crate::openapi::ApiDoc::openapi())
}
