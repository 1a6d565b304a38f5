//! Configuration management for the docs portal.
//!
//! All settings come from environment variables (with `.env` support) and
//! carry defaults matching the canonical deployment: default theme, forced
//! light mode, the Ola MD client API metadata, and the bundled spec file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppError;
use crate::render::{DarkModePolicy, PageMetadata, RenderConfig, Theme};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Documentation viewer settings
    pub docs: DocsConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Documentation viewer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Viewer theme
    pub theme: Theme,
    /// Dark mode policy
    pub dark_mode: DarkModePolicy,
    /// Page title forwarded to the renderer; empty disables page metadata
    pub page_title: String,
    /// Page description forwarded to the renderer
    pub page_description: String,
    /// Optional absolute favicon URL
    pub favicon_url: Option<String>,
    /// URL the viewer fetches the OpenAPI document from
    pub spec_url: String,
    /// Directory the spec files are served from
    pub spec_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let theme = std::env::var("DOCS_THEME")
            .unwrap_or_else(|_| "default".to_string())
            .parse::<Theme>()
            .map_err(|e| e.to_string())?;

        let dark_mode = std::env::var("DOCS_DARK_MODE")
            .unwrap_or_else(|_| "light".to_string())
            .parse::<DarkModePolicy>()
            .map_err(|e| e.to_string())?;

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("DOCS_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("DOCS_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8090),
            },
            docs: DocsConfig {
                theme,
                dark_mode,
                page_title: std::env::var("DOCS_PAGE_TITLE")
                    .unwrap_or_else(|_| "Ola MD Client API".to_string()),
                page_description: std::env::var("DOCS_PAGE_DESCRIPTION")
                    .unwrap_or_else(|_| "Client API description".to_string()),
                favicon_url: std::env::var("DOCS_FAVICON_URL").ok(),
                spec_url: std::env::var("DOCS_SPEC_URL")
                    .unwrap_or_else(|_| "/specs/client-api.yml".to_string()),
                spec_dir: std::env::var("DOCS_SPEC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("specs")),
            },
        })
    }
}

impl DocsConfig {
    /// Build the validated render configuration for this deployment.
    pub fn render_config(&self) -> Result<RenderConfig, AppError> {
        RenderConfig::new(
            self.theme,
            self.dark_mode,
            self.metadata(),
            self.favicon_url.as_deref(),
            &self.spec_url,
        )
    }

    fn metadata(&self) -> Option<PageMetadata> {
        if self.page_title.is_empty() {
            return None;
        }
        Some(PageMetadata {
            title: self.page_title.clone(),
            description: self.page_description.clone(),
        })
    }

    /// On-disk path of the configured spec document, when it is served
    /// locally. `None` when the viewer points at an external URL.
    pub fn local_spec_path(&self) -> Option<PathBuf> {
        self.spec_url
            .strip_prefix("/specs/")
            .map(|name| self.spec_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_docs_env() {
        for key in [
            "DOCS_THEME",
            "DOCS_DARK_MODE",
            "DOCS_PAGE_TITLE",
            "DOCS_PAGE_DESCRIPTION",
            "DOCS_FAVICON_URL",
            "DOCS_SPEC_URL",
            "DOCS_SPEC_DIR",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_match_canonical_deployment() {
        clear_docs_env();
        let config = Config::from_env().expect("config loads");

        assert_eq!(config.docs.theme, Theme::Default);
        assert_eq!(config.docs.dark_mode, DarkModePolicy::ForceLight);
        assert_eq!(config.docs.page_title, "Ola MD Client API");
        assert_eq!(config.docs.spec_url, "/specs/client-api.yml");
        assert_eq!(
            config.docs.local_spec_path(),
            Some(PathBuf::from("specs/client-api.yml"))
        );
    }

    #[test]
    #[serial]
    fn theme_and_dark_mode_come_from_env() {
        clear_docs_env();
        std::env::set_var("DOCS_THEME", "purple");
        std::env::set_var("DOCS_DARK_MODE", "toggle");

        let config = Config::from_env().expect("config loads");
        assert_eq!(config.docs.theme, Theme::Purple);
        assert_eq!(config.docs.dark_mode, DarkModePolicy::UserToggle);

        clear_docs_env();
    }

    #[test]
    #[serial]
    fn unknown_theme_is_a_startup_error() {
        clear_docs_env();
        std::env::set_var("DOCS_THEME", "neon");

        let result = Config::from_env();
        assert!(result.is_err());

        clear_docs_env();
    }

    #[test]
    #[serial]
    fn external_spec_url_has_no_local_path() {
        clear_docs_env();
        std::env::set_var("DOCS_SPEC_URL", "https://example.com/client-api.yml");

        let config = Config::from_env().expect("config loads");
        assert_eq!(config.docs.local_spec_path(), None);

        clear_docs_env();
    }
}
