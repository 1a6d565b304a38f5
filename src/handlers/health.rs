//! Health check handlers.

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: "docs-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready when the configured spec document is present on disk. Deployments
/// pointing the viewer at an external spec URL are always ready.
#[utoipa::path(
    get,
    path = "/api/v1/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Spec document is reachable"),
        (status = 503, description = "Spec document is missing")
    )
)]
pub async fn readiness_check(config: web::Data<Config>) -> impl Responder {
    match config.docs.local_spec_path() {
        Some(path) if !path.exists() => {
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unavailable",
                "missing": path.display().to_string(),
            }))
        }
        _ => HttpResponse::Ok().json(serde_json::json!({"status": "ready"})),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/health/live",
    tag = "health",
    responses(
        (status = 200, description = "Process is alive")
    )
)]
pub async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
