use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_THEME: &str = "default";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Theme preset used when nothing valid is persisted.
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// Rows per page for client-side paginated tables.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            page_size: default_page_size(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Parse a TOML document, falling back to defaults when it is malformed.
    pub fn from_toml_or_default(contents: &str) -> Self {
        match toml::from_str::<AppConfig>(contents) {
            Ok(config) => config.normalized(),
            Err(e) => {
                tracing::warn!("[config] failed to parse config.toml: {e}; using defaults");
                AppConfig::default()
            }
        }
    }

    /// Replace the API base URL when an override is supplied.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        if self.ui.page_size == 0 {
            self.ui.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
