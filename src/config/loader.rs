//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure.
///
/// Every section is optional in the TOML source; a missing section or field
/// takes the value the page markup is expected to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub elements: ElementsConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identifiers of the fixed elements the helpers look up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementsConfig {
    /// Checkbox read by `get_swap_bytes`.
    #[serde(default = "default_swap_bytes_id")]
    pub swap_bytes: String,

    /// List container that receives download links.
    #[serde(default = "default_download_zone_id")]
    pub download_zone: String,
}

/// Download link options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// MIME type the payload blob is tagged with.
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `page_utils=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            swap_bytes: default_swap_bytes_id(),
            download_zone: default_download_zone_id(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            mime_type: default_mime_type(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_swap_bytes_id() -> String {
    "swap_bytes".to_string()
}

fn default_download_zone_id() -> String {
    "download_zone".to_string()
}

fn default_mime_type() -> String {
    "application/octet-stream".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PageConfig {
    /// Parse configuration from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(source)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        Self::from_toml_str(&content)
    }

    /// Serialize configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}
