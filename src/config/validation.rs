//! Configuration validation logic.

use crate::config::loader::PageConfig;
use crate::error::{Error, Result};
use regex::Regex;
use tracing_subscriber::EnvFilter;

/// Validate the entire configuration.
pub fn validate_config(config: &PageConfig) -> Result<()> {
    validate_element_id("elements.swap_bytes", &config.elements.swap_bytes)?;
    validate_element_id("elements.download_zone", &config.elements.download_zone)?;
    validate_mime_type(&config.download.mime_type)?;
    validate_log_level(&config.logging.level)?;

    Ok(())
}

/// Validate an element identifier.
///
/// HTML ids must be non-empty and must not contain whitespace.
pub fn validate_element_id(field: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Element id cannot be empty".to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Element id '{}' must not contain whitespace", id),
        });
    }

    Ok(())
}

/// Validate a blob MIME type (`type/subtype`, no parameters).
pub fn validate_mime_type(mime_type: &str) -> Result<()> {
    let mime_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*$")
        .map_err(|e| Error::Config(format!("Invalid MIME pattern: {}", e)))?;

    if !mime_pattern.is_match(mime_type) {
        return Err(Error::ConfigValidation {
            field: "download.mime_type".to_string(),
            message: format!("'{}' is not a type/subtype MIME type", mime_type),
        });
    }

    Ok(())
}

/// Validate a log filter directive.
pub fn validate_log_level(level: &str) -> Result<()> {
    if level.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "logging.level".to_string(),
            message: "Log level cannot be empty".to_string(),
        });
    }

    EnvFilter::try_new(level).map_err(|e| Error::ConfigValidation {
        field: "logging.level".to_string(),
        message: format!("Invalid filter '{}': {}", level, e),
    })?;

    Ok(())
}
