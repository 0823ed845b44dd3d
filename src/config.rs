use crate::api::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64, // Total budget for the single request
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub template_name: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub base_url: String, // Where the template's assets are resolved from
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
    pub level: String, // Used when RUST_LOG is unset
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 15,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_name: "main.html".to_string(),
            viewport_width: 800,
            viewport_height: 600,
            base_url: "file://templates".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "airport-info.log".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads the TOML config at `path`.
    /// If it doesn't exist, writes the defaults there and uses them.
    ///
    /// Runs before logging is installed, so problems come back as errors for
    /// the caller to report.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let default_config = Config::default();
                // Save default config to disk for the user to edit later
                if let Ok(toml_string) = toml::to_string_pretty(&default_config) {
                    let _ = fs::write(path, toml_string);
                }
                Ok(default_config)
            }
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
