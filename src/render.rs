//! Render configuration for the API reference viewer.
//!
//! The viewer itself is the Scalar API Reference bundle loaded from a CDN;
//! this module owns the typed configuration handed to it. Earlier deployments
//! carried three near-duplicate option bags with conflicting dark-mode
//! fields, so the dark-mode surface is collapsed into a single
//! [`DarkModePolicy`] and the renderer options are derived from it. The
//! emitted options cannot disagree with each other.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::AppError;

const REFERENCE_TEMPLATE: &str = include_str!("../static/reference.html");

/// Visual theme understood by the Scalar renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    Alternate,
    Moon,
    Purple,
    Solarized,
    Kepler,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Alternate => "alternate",
            Theme::Moon => "moon",
            Theme::Purple => "purple",
            Theme::Solarized => "solarized",
            Theme::Kepler => "kepler",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Default
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Theme::Default),
            "alternate" => Ok(Theme::Alternate),
            "moon" => Ok(Theme::Moon),
            "purple" => Ok(Theme::Purple),
            "solarized" => Ok(Theme::Solarized),
            "kepler" => Ok(Theme::Kepler),
            other => Err(AppError::Config(format!(
                "unknown theme '{other}' (expected one of: default, alternate, moon, purple, solarized, kepler)"
            ))),
        }
    }
}

/// How the viewer treats dark mode.
///
/// The renderer exposes three overlapping knobs (a forced initial state, an
/// initial dark-mode boolean, and a toggle-visibility flag). One policy value
/// drives all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DarkModePolicy {
    ForceLight,
    ForceDark,
    UserToggle,
}

impl Default for DarkModePolicy {
    fn default() -> Self {
        DarkModePolicy::ForceLight
    }
}

impl fmt::Display for DarkModePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DarkModePolicy::ForceLight => "force-light",
            DarkModePolicy::ForceDark => "force-dark",
            DarkModePolicy::UserToggle => "user-toggle",
        };
        f.write_str(s)
    }
}

impl FromStr for DarkModePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "force-light" => Ok(DarkModePolicy::ForceLight),
            "dark" | "force-dark" => Ok(DarkModePolicy::ForceDark),
            "toggle" | "user-toggle" => Ok(DarkModePolicy::UserToggle),
            other => Err(AppError::Config(format!(
                "unknown dark mode policy '{other}' (expected light, dark, or toggle)"
            ))),
        }
    }
}

/// Page-level metadata forwarded to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Static configuration for one deployment of the API reference viewer.
///
/// Built once at startup, validated, then shared read-only across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub theme: Theme,
    pub dark_mode: DarkModePolicy,
    pub metadata: Option<PageMetadata>,
    pub favicon_url: Option<Url>,
    pub spec_source: String,
}

impl RenderConfig {
    pub fn new(
        theme: Theme,
        dark_mode: DarkModePolicy,
        metadata: Option<PageMetadata>,
        favicon_url: Option<&str>,
        spec_source: &str,
    ) -> Result<Self, AppError> {
        let spec_source = validate_spec_source(spec_source)?;
        let favicon_url = favicon_url.map(validate_favicon_url).transpose()?;

        Ok(RenderConfig {
            theme,
            dark_mode,
            metadata,
            favicon_url,
            spec_source,
        })
    }

    /// Option bag in the shape the Scalar bundle reads from
    /// `data-configuration`.
    pub fn viewer_options(&self) -> Value {
        let mut opts = Map::new();
        opts.insert("theme".into(), json!(self.theme.as_str()));

        match self.dark_mode {
            DarkModePolicy::ForceLight => {
                opts.insert("darkMode".into(), json!(false));
                opts.insert("forceDarkModeState".into(), json!("light"));
                opts.insert("hideDarkModeToggle".into(), json!(true));
            }
            DarkModePolicy::ForceDark => {
                opts.insert("darkMode".into(), json!(true));
                opts.insert("forceDarkModeState".into(), json!("dark"));
                opts.insert("hideDarkModeToggle".into(), json!(true));
            }
            DarkModePolicy::UserToggle => {
                opts.insert("hideDarkModeToggle".into(), json!(false));
            }
        }

        if let Some(meta) = &self.metadata {
            opts.insert(
                "metaData".into(),
                json!({
                    "title": meta.title,
                    "description": meta.description,
                }),
            );
        }

        if let Some(favicon) = &self.favicon_url {
            opts.insert("favicon".into(), json!(favicon.as_str()));
        }

        Value::Object(opts)
    }
}

fn validate_spec_source(spec_source: &str) -> Result<String, AppError> {
    if spec_source.is_empty() {
        return Err(AppError::Config("spec source must not be empty".into()));
    }
    if spec_source.starts_with('/') || Url::parse(spec_source).is_ok() {
        return Ok(spec_source.to_string());
    }
    Err(AppError::Config(format!(
        "spec source '{spec_source}' must be a rooted path or an absolute URL"
    )))
}

fn validate_favicon_url(favicon: &str) -> Result<Url, AppError> {
    let url = Url::parse(favicon)
        .map_err(|e| AppError::Config(format!("invalid favicon URL '{favicon}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::Config(format!(
            "favicon URL '{favicon}' must use http or https, got '{scheme}'"
        ))),
    }
}

/// Assemble the viewer page around the configured options. Everything past
/// the page shell is owned by the Scalar bundle.
pub fn render_reference_page(config: &RenderConfig) -> String {
    let title = config
        .metadata
        .as_ref()
        .map(|m| m.title.as_str())
        .unwrap_or("API Reference");

    let mut head_extra = String::new();
    if let Some(meta) = &config.metadata {
        head_extra.push_str(&format!(
            "    <meta name=\"description\" content=\"{}\">\n",
            escape_attr(&meta.description)
        ));
    }
    if let Some(favicon) = &config.favicon_url {
        head_extra.push_str(&format!(
            "    <link rel=\"icon\" href=\"{}\">\n",
            escape_attr(favicon.as_str())
        ));
    }

    REFERENCE_TEMPLATE
        .replace("{{title}}", &escape_attr(title))
        .replace("{{head_extra}}", head_extra.trim_end())
        .replace("{{spec_url}}", &escape_attr(&config.spec_source))
        .replace(
            "{{configuration}}",
            &escape_attr(&config.viewer_options().to_string()),
        )
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
