use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Service origin, e.g. "http://localhost:8080". Empty means the origin
    /// the console page was served from.
    #[serde(default)]
    pub base_url: String,
    /// Prefix of the REST resources under the service origin
    #[serde(default = "default_root")]
    pub root: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_root() -> String {
    "/api".to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            root: default_root(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Configured level, falling back to `Info` on unknown names
    pub fn level(&self) -> log::Level {
        log::Level::from_str(self.level.trim()).unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
root = "/api"

[logging]
level = "debug"
"#;

/// Id of the optional `<script type="application/toml">` element in the host
/// page that replaces the embedded defaults without rebuilding the bundle
pub const CONFIG_ELEMENT_ID: &str = "console-config";

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Pick the page-supplied document if it has any content, else the embedded one.
/// Sections missing from the page document take their defaults.
pub fn resolve_config(page: Option<&str>) -> Result<Config, toml::de::Error> {
    match page.filter(|text| !text.trim().is_empty()) {
        Some(text) => Config::from_toml_str(text),
        None => Config::from_toml_str(DEFAULT_CONFIG),
    }
}

fn page_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Load the console configuration from the host page, falling back to the
/// embedded defaults when the page carries none
pub fn load_config() -> Result<Config, toml::de::Error> {
    resolve_config(page_config().as_deref())
}
