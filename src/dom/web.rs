//! Render tree backed by the browser's live `document`.

use js_sys::{Array, ArrayBuffer, JsString, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, Element, File, HtmlElement, HtmlInputElement, Url};

use crate::dom::{Capability, CheckedState, ElementRef, FileSelection, HiddenFlag, RenderTree};
use crate::error::{Error, Result};

/// The page's `document`, looked up from the global `window`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Bind to the current page. `None` outside a window context (e.g. a worker).
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Capability<Element> for HtmlInputElement {
    fn narrow(handle: Element) -> Option<Self> {
        handle.dyn_into::<HtmlInputElement>().ok()
    }
}

impl Capability<Element> for HtmlElement {
    fn narrow(handle: Element) -> Option<Self> {
        handle.dyn_into::<HtmlElement>().ok()
    }
}

impl CheckedState for HtmlInputElement {
    fn is_checked(&self) -> bool {
        self.checked()
    }
}

impl HiddenFlag for HtmlElement {
    fn is_hidden(&self) -> bool {
        self.hidden()
    }

    fn put_hidden(&self, hidden: bool) {
        self.set_hidden(hidden);
    }
}

impl FileSelection for HtmlInputElement {
    type File = File;

    fn first_file(&self) -> Option<File> {
        self.files().and_then(|files| files.get(0))
    }
}

impl RenderTree for WebDocument {
    type Handle = Element;
    type Checkbox = HtmlInputElement;
    type Visible = HtmlElement;
    type FileInput = HtmlInputElement;
    type File = File;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_object_url(&self, payload: &[u8], mime_type: &str) -> Result<String> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(payload));

        let options = BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        Ok(Url::create_object_url_with_blob(&blob)?)
    }

    fn revoke_object_url(&self, url: &str) -> Result<()> {
        Url::revoke_object_url(url)?;
        Ok(())
    }

    fn append_download_link(&self, zone: &Element, href: &str, file_name: &str) -> Result<()> {
        let anchor = self.document.create_element("a")?;
        anchor.set_text_content(Some(file_name));
        anchor.set_attribute("href", href)?;
        anchor.set_attribute("download", file_name)?;

        let item = self.document.create_element("li")?;
        item.append_child(&anchor)?;

        zone.append_child(&item)?;
        Ok(())
    }
}

/// Interpret a JavaScript argument as an element reference.
///
/// Strings (primitive or `String` objects) become identifiers and `Element`s
/// become handles; anything else is not a reference and yields `None`.
pub fn element_ref_from_js(value: &wasm_bindgen::JsValue) -> Option<ElementRef<Element>> {
    if let Some(id) = value.as_string() {
        return Some(ElementRef::Identifier(id));
    }
    if value.is_instance_of::<JsString>() {
        return value
            .unchecked_ref::<JsString>()
            .value_of()
            .as_string()
            .map(ElementRef::Identifier);
    }
    value
        .dyn_ref::<Element>()
        .map(|element| ElementRef::Handle(element.clone()))
}

/// Read the full contents of a selected file.
pub async fn read_file(file: &File) -> Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await?
        .dyn_into::<ArrayBuffer>()
        .map_err(|_| Error::Host("File.arrayBuffer() did not yield an ArrayBuffer".to_string()))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
