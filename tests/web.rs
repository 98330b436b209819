//! Browser tests against the live document. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use page_utils::dom::web::WebDocument;
use page_utils::exports;
use page_utils::{ElementRef, Page};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    WebDocument::current().unwrap().document().clone()
}

fn page() -> Page<WebDocument> {
    Page::with_defaults(WebDocument::current().unwrap())
}

fn mount(tag: &str, id: &str) -> Element {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let element = doc.create_element(tag).unwrap();
    element.set_id(id);
    doc.body().unwrap().append_child(&element).unwrap();
    element
}

fn mount_input(kind: &str, id: &str) -> HtmlInputElement {
    let input = mount("input", id).dyn_into::<HtmlInputElement>().unwrap();
    input.set_type(kind);
    input
}

#[wasm_bindgen_test]
fn missing_ids_read_as_defaults() {
    let page = page();
    assert!(!page.get_checked("no_such_element"));
    assert!(!page.get_hidden("no_such_element"));
    assert!(page.get_file("no_such_element").is_none());
    page.set_hidden("no_such_element", true);
}

#[wasm_bindgen_test]
fn checked_state_is_read_fresh() {
    let input = mount_input("checkbox", "web_cb");
    input.set_checked(true);

    let page = page();
    assert!(page.get_checked("web_cb"));
    input.set_checked(false);
    assert!(!page.get_checked("web_cb"));
}

#[wasm_bindgen_test]
fn swap_bytes_matches_checked() {
    let input = mount_input("checkbox", "swap_bytes");
    input.set_checked(true);

    let page = page();
    assert_eq!(page.get_swap_bytes(), page.get_checked("swap_bytes"));
    assert!(page.get_swap_bytes());
}

#[wasm_bindgen_test]
fn hidden_flag_through_id_and_handle() {
    let div = mount("div", "web_panel").dyn_into::<HtmlElement>().unwrap();
    div.set_hidden(true);

    let page = page();
    assert!(page.get_hidden("web_panel"));
    page.set_hidden(ElementRef::handle(div.clone().unchecked_into::<Element>()), false);
    assert!(!div.hidden());
    assert!(!page.get_hidden("web_panel"));
}

#[wasm_bindgen_test]
fn file_input_without_selection() {
    mount_input("file", "web_file");
    assert!(page().get_file("web_file").is_none());
}

#[wasm_bindgen_test]
fn put_download_appends_link() {
    let zone = mount("ul", "download_zone");

    let record = page().put_download(b"hello", "greeting.txt").unwrap();

    assert_eq!(zone.child_element_count(), 1);
    let item = zone.first_element_child().unwrap();
    assert_eq!(item.tag_name(), "LI");
    let link = item.first_element_child().unwrap();
    assert_eq!(link.tag_name(), "A");
    assert_eq!(link.text_content().as_deref(), Some("greeting.txt"));
    assert_eq!(link.get_attribute("download").as_deref(), Some("greeting.txt"));
    assert_eq!(link.get_attribute("href"), Some(record.url.clone()));
    assert!(record.url.starts_with("blob:"));
}

fn unmount(id: &str) {
    if let Some(old) = document().get_element_by_id(id) {
        old.remove();
    }
}

fn string_object(text: &str) -> JsValue {
    js_sys::Function::new_with_args("text", "return new String(text)")
        .call1(&JsValue::NULL, &JsValue::from_str(text))
        .unwrap()
}

#[wasm_bindgen_test]
fn exports_treat_non_references_as_unresolved() {
    let div = mount("div", "exp_panel").dyn_into::<HtmlElement>().unwrap();
    div.set_hidden(true);

    for value in [JsValue::NULL, JsValue::UNDEFINED, JsValue::from(1), JsValue::TRUE] {
        assert!(!exports::get_checked(value.clone()));
        assert!(!exports::get_hidden(value.clone()));
        assert!(exports::get_file(value.clone()).is_none());
        exports::set_hidden(value, false);
    }
    assert!(div.hidden());
}

#[wasm_bindgen_test]
fn exports_resolve_ids_and_handles() {
    let input = mount_input("checkbox", "exp_cb");
    input.set_checked(true);
    let div = mount("div", "exp_box").dyn_into::<HtmlElement>().unwrap();

    assert!(exports::get_checked(JsValue::from_str("exp_cb")));
    assert!(exports::get_checked(input.clone().into()));
    input.set_checked(false);
    assert!(!exports::get_checked(JsValue::from(input.clone())));

    exports::set_hidden(JsValue::from(div.clone()), true);
    assert!(div.hidden());
    assert!(exports::get_hidden(JsValue::from_str("exp_box")));
    exports::set_hidden(JsValue::from_str("exp_box"), false);
    assert!(!exports::get_hidden(JsValue::from(div)));

    assert!(!exports::get_checked(JsValue::from_str("exp_missing")));
    assert!(exports::get_file(JsValue::from_str("exp_box")).is_none());
}

#[wasm_bindgen_test]
fn exports_accept_string_objects() {
    let input = mount_input("checkbox", "exp_cb_obj");
    input.set_checked(true);

    assert!(exports::get_checked(string_object("exp_cb_obj")));
}

#[wasm_bindgen_test]
fn export_swap_bytes_matches_checked() {
    let input = mount_input("checkbox", "swap_bytes");
    input.set_checked(false);
    assert_eq!(
        exports::get_swap_bytes(),
        exports::get_checked(JsValue::from_str("swap_bytes"))
    );
    input.set_checked(true);
    assert!(exports::get_swap_bytes());
}

#[wasm_bindgen_test]
fn export_put_download_without_zone_is_quiet() {
    unmount("download_zone");

    exports::put_download(b"hello", "greeting.txt");

    assert!(document().get_element_by_id("download_zone").is_none());
}

#[wasm_bindgen_test]
fn export_put_download_appends_link() {
    let zone = mount("ul", "download_zone");

    exports::put_download(b"hello", "greeting.txt");

    assert_eq!(zone.child_element_count(), 1);
    let link = zone.first_element_child().unwrap().first_element_child().unwrap();
    assert_eq!(link.text_content().as_deref(), Some("greeting.txt"));
    assert!(link.get_attribute("href").unwrap().starts_with("blob:"));
}
