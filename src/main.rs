//! Docs Portal - HTTP Server
//!
//! Serves the Ola Digital Health landing page and the client API reference.
use actix_web::{web, App, HttpServer};
use docs_service::routes;
use docs_service::Config;
use std::io;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {e}");
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
        }
    };

    // Validate the viewer configuration up front so a bad deployment fails
    // at startup instead of on the first request.
    let render_config = match config.docs.render_config() {
        Ok(rc) => rc,
        Err(e) => {
            tracing::error!("Invalid viewer configuration: {e}");
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    if let Some(spec_path) = config.docs.local_spec_path() {
        if !spec_path.exists() {
            tracing::warn!(
                spec_path = %spec_path.display(),
                "spec document not found; readiness will report unavailable"
            );
        }
    }

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!(
        %bind_address,
        theme = %render_config.theme,
        dark_mode = %render_config.dark_mode,
        spec_source = %render_config.spec_source,
        "docs-service starting HTTP server"
    );

    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_config.clone()))
            .app_data(web::Data::new(render_config.clone()))
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
