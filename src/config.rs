//! Application configuration.
//!
//! Compile-time constants live here alongside [`AppConfig`], the runtime
//! configuration object. `AppConfig` is parsed once from the embedded
//! `assets/config.toml` and handed to the resolver and API client at
//! construction; nothing reads it through a global.

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Embedded default configuration.
pub const CONFIG_TOML: &str = include_str!("../assets/config.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the course header.
pub const APP_NAME: &str = "Course Viewer";

/// Build-time override for the API base URL.
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("LMS_API_BASE");

/// Build-time log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL: Option<&str> = option_env!("LMS_LOG");

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Default `limit` for list endpoints.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Upper bound on module pages fetched in one listing.
pub const MAX_MODULE_PAGES: u32 = 100;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

// =============================================================================
// Viewer Configuration
// =============================================================================

/// Base used to resolve links that are not absolute URLs.
pub const DEFAULT_FALLBACK_BASE: &str = "http://localhost/";

/// Online viewer for office documents; the encoded link is appended.
pub const DEFAULT_DOCUMENT_VIEWER: &str = "https://view.officeapps.live.com/op/embed.aspx?src=";

/// Hosts that refuse embedding or inject ads.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "mediafire.com",
    "mega.nz",
    "4shared.com",
    "zippyshare.com",
    "rapidgator.net",
    "uploaded.net",
    "sendspace.com",
    "solidfiles.com",
    "linkvertise.com",
    "adf.ly",
    "ouo.io",
    "shorte.st",
];

/// Sandbox flags for embedded frames.
pub const FRAME_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-popups allow-forms allow-presentation";

/// Feature policy for embedded players.
pub const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; fullscreen";

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key holding the serialized session.
pub const DEFAULT_SESSION_KEY: &str = "lms_session";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// REST backend settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub page_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Resource viewer settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub fallback_base: String,
    pub document_viewer: String,
    pub denylist: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fallback_base: DEFAULT_FALLBACK_BASE.to_string(),
            document_viewer: DEFAULT_DOCUMENT_VIEWER.to_string(),
            denylist: DEFAULT_DENYLIST.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Browser storage settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

/// Complete runtime configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub viewer: ViewerConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Parse a TOML document. Missing sections take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load the embedded configuration and apply build-time overrides.
    ///
    /// A malformed embedded file is logged and replaced by the defaults.
    pub fn load() -> Self {
        let mut config = Self::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
            log::warn!("embedded config rejected, using defaults: {}", e);
            Self::default()
        });
        if let Some(base) = API_BASE_OVERRIDE {
            config.api.base_url = base.to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.api.page_limit, 50);
        assert_eq!(config.storage.session_key, "lms_session");
        assert!(config.viewer.denylist.iter().any(|h| h == "mediafire.com"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"https://lms.example.org/api\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "https://lms.example.org/api");
        assert_eq!(config.api.timeout_ms, FETCH_TIMEOUT_MS);
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(AppConfig::from_toml("[api\nbase_url = 3").is_err());
    }
}
