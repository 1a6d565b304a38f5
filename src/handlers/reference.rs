//! API reference viewer and spec file serving.

use actix_web::{web, HttpResponse};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::render::{self, RenderConfig};

/// Interactive API reference. Rendering is delegated to the Scalar CDN
/// bundle; this handler only assembles the page shell around the deployment's
/// [`RenderConfig`].
pub async fn api_reference(config: web::Data<RenderConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render::render_reference_page(config.get_ref()))
}

/// Serve an OpenAPI YAML document from the configured spec directory.
///
/// The file content is owned by whoever publishes the spec; it is streamed
/// back as-is with no validation.
pub async fn serve_spec(
    path: web::Path<String>,
    config: web::Data<Config>,
) -> Result<HttpResponse> {
    let filename = path.into_inner();
    let file = validated_spec_path(&config.docs.spec_dir, &filename)?;

    let body = tokio::fs::read(&file).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(format!("spec file '{filename}' not found"))
        } else {
            AppError::Io(e)
        }
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/yaml")
        .body(body))
}

fn validated_spec_path(dir: &Path, filename: &str) -> Result<PathBuf> {
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(AppError::BadRequest(format!(
            "invalid spec file name '{filename}'"
        )));
    }
    if !(filename.ends_with(".yml") || filename.ends_with(".yaml")) {
        return Err(AppError::BadRequest(format!(
            "spec file '{filename}' must be a YAML document"
        )));
    }
    Ok(dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_yaml_names() {
        let dir = Path::new("specs");
        assert_eq!(
            validated_spec_path(dir, "client-api.yml").unwrap(),
            PathBuf::from("specs/client-api.yml")
        );
        assert!(validated_spec_path(dir, "internal.yaml").is_ok());
    }

    #[test]
    fn rejects_traversal() {
        let dir = Path::new("specs");
        assert!(validated_spec_path(dir, "../secrets.yml").is_err());
        assert!(validated_spec_path(dir, "nested/other.yml").is_err());
        assert!(validated_spec_path(dir, "..\\other.yml").is_err());
    }

    #[test]
    fn rejects_non_yaml_names() {
        let dir = Path::new("specs");
        assert!(validated_spec_path(dir, "client-api.json").is_err());
        assert!(validated_spec_path(dir, "client-api").is_err());
    }
}
