//! Client configuration
//!
//! An embedded default TOML document, optionally replaced by an inline
//! `<script id="fnol-config" type="application/toml">` block in `index.html`.
//! Sections missing from the override keep their defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix of every backend call, without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api/v1".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Used when neither the URL, the stored choice nor the browser names a supported language
    pub default_language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.level.trim().parse().unwrap_or(log::Level::Debug)
    }
}

const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "/api/v1"

[ui]
default_language = "en"

[logging]
level = "debug"
"#;

const CONFIG_ELEMENT_ID: &str = "fnol-config";

static CONFIG: Lazy<ClientConfig> = Lazy::new(load_config);

/// Process-wide configuration, read once on first access
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

pub fn parse_config(source: &str) -> Result<ClientConfig, toml::de::Error> {
    let mut config: ClientConfig = toml::from_str(source)?;
    let trimmed = config.api.base_url.trim_end_matches('/').to_string();
    config.api.base_url = trimmed;
    Ok(config)
}

fn default_config() -> ClientConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load configuration
///
/// Search order:
/// 1. Inline `#fnol-config` block of the host page
/// 2. Falls back to embedded default config
///
/// Runs before the logger is installed, so problems go straight to the console.
pub fn load_config() -> ClientConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match inline {
        Some(text) => match parse_config(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e).into(),
                );
                default_config()
            }
        },
        None => default_config(),
    }
}
