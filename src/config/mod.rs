//! Configuration module for page-utils.
//!
//! This module handles:
//! - Loading the page configuration from TOML
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{DownloadConfig, ElementsConfig, LoggingConfig, PageConfig};
pub use validation::{validate_config, validate_element_id, validate_log_level, validate_mime_type};
