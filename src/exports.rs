//! JavaScript surface.
//!
//! Each export binds to the live `document` on every call and keeps the
//! fail-quiet contract: an argument that is not an element reference, or an
//! element of the wrong kind, reads as `false` / `undefined` and writes
//! nothing. `configure` is the only export that throws.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::File;

use crate::config::{validate_config, PageConfig};
use crate::dom::web::{element_ref_from_js, WebDocument};
use crate::error::Error;
use crate::page::Page;

thread_local! {
    static CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::default());
}

fn current_page() -> Option<Page<WebDocument>> {
    let config = CONFIG.with(|config| config.borrow().clone());
    WebDocument::current().map(|document| Page::new(document, config))
}

fn js_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse and install a TOML page configuration, then start console logging.
///
/// Calling it again replaces the configuration and the log level.
#[wasm_bindgen]
pub fn configure(source: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_toml_str(source).map_err(js_error)?;
    validate_config(&config).map_err(js_error)?;
    crate::logging::init(&config.logging.level).map_err(js_error)?;

    tracing::debug!(?config, "Page configuration installed");
    CONFIG.with(|current| *current.borrow_mut() = config);
    Ok(())
}

#[wasm_bindgen]
pub fn get_checked(elem: JsValue) -> bool {
    match (current_page(), element_ref_from_js(&elem)) {
        (Some(page), Some(elem)) => page.get_checked(elem),
        _ => false,
    }
}

#[wasm_bindgen]
pub fn get_swap_bytes() -> bool {
    current_page().is_some_and(|page| page.get_swap_bytes())
}

#[wasm_bindgen]
pub fn set_hidden(elem: JsValue, hidden: bool) {
    if let (Some(page), Some(elem)) = (current_page(), element_ref_from_js(&elem)) {
        page.set_hidden(elem, hidden);
    }
}

#[wasm_bindgen]
pub fn get_hidden(elem: JsValue) -> bool {
    match (current_page(), element_ref_from_js(&elem)) {
        (Some(page), Some(elem)) => page.get_hidden(elem),
        _ => false,
    }
}

#[wasm_bindgen]
pub fn get_file(elem: JsValue) -> Option<File> {
    let page = current_page()?;
    page.get_file(element_ref_from_js(&elem)?)
}

/// Add a download link for `data` to the download zone.
///
/// Failures are logged, not thrown.
#[wasm_bindgen]
pub fn put_download(data: &[u8], file_name: &str) {
    let Some(page) = current_page() else {
        tracing::warn!("No document available, dropping download of {}", file_name);
        return;
    };
    if let Err(e) = page.put_download(data, file_name) {
        tracing::warn!("Download of {} failed: {}", file_name, e);
    }
}
