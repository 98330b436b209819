//! Error types for page-utils.
//!
//! The element accessors never produce these: a reference that does not
//! resolve degrades to `false`, `None` or a no-op. Errors come from loading
//! configuration, from building a download link, and from reading files.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Render tree errors
    #[error("Element not found in page: #{0}")]
    MissingElement(String),

    #[error("Host call failed: {0}")]
    Host(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        // Thrown values are usually `Error` objects; fall back to their debug form.
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Error::Host(message)
    }
}
