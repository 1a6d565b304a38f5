/// OpenAPI documentation for the Ola docs portal itself
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ola Docs Portal",
        version = "0.1.0",
        description = "Documentation portal for Ola Digital Health. Serves the marketing landing page, the interactive client API reference, and the OpenAPI documents the reference viewer consumes.",
        contact(
            name = "Ola Digital Team",
            email = "team@oladigital.health"
        ),
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8090", description = "Development server"),
        (url = "https://docs.oladigital.health", description = "Production server"),
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::health::readiness_check,
        crate::handlers::health::liveness_check,
    ),
    components(
        schemas(crate::handlers::health::HealthResponse)
    ),
    tags(
        (name = "health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Ola Docs Portal"
    }

    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}
