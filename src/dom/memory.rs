//! In-memory render tree.
//!
//! Stands in for the browser document wherever there is no browser: native
//! builds, tests, and hosts that drive the helpers without a DOM. Handles are
//! shared references into the tree, so a change made through one handle is
//! visible through every other handle and every later lookup.
//!
//! Object URLs are tracked in the page and stay alive until revoked
//! explicitly; nothing reclaims them on its own.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use uuid::Uuid;

use crate::dom::{Capability, CheckedState, FileSelection, HiddenFlag, RenderTree};
use crate::error::{Error, Result};

/// Namespace an element was created in. Only HTML elements carry a hidden flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Html,
    Svg,
}

/// `type` attribute of an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Checkbox,
    Radio,
    File,
    Text,
}

/// A file as selected in a file control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: String::new(),
            bytes: bytes.into(),
        }
    }

    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Payload held behind an object URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBlob {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
struct InputState {
    kind: InputKind,
    checked: bool,
    files: Vec<MemoryFile>,
}

#[derive(Debug)]
struct NodeData {
    tag: String,
    namespace: Namespace,
    id: Option<String>,
    hidden: bool,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<MemoryElement>,
    parent: Weak<RefCell<NodeData>>,
    input: Option<InputState>,
}

/// Handle to an element of a [`MemoryPage`].
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<NodeData>>);

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MemoryElement {
    fn new(tag: &str, namespace: Namespace, input: Option<InputState>) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            namespace,
            id: None,
            hidden: false,
            attributes: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: Weak::new(),
            input,
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn namespace(&self) -> Namespace {
        self.0.borrow().namespace
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.0.borrow_mut().id = Some(id.into());
    }

    /// Builder form of [`MemoryElement::set_id`].
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    pub fn hidden(&self) -> bool {
        self.0.borrow().hidden
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.0.borrow_mut().hidden = hidden;
    }

    /// Checked state, or `None` for elements that are not input controls.
    pub fn checked(&self) -> Option<bool> {
        self.0.borrow().input.as_ref().map(|input| input.checked)
    }

    /// Toggle an input control. Ignored for other elements.
    pub fn set_checked(&self, checked: bool) {
        if let Some(input) = self.0.borrow_mut().input.as_mut() {
            input.checked = checked;
        }
    }

    pub fn input_kind(&self) -> Option<InputKind> {
        self.0.borrow().input.as_ref().map(|input| input.kind)
    }

    /// Replace the selection of a file control. Ignored for other elements.
    pub fn select_files(&self, files: Vec<MemoryFile>) {
        if let Some(input) = self.0.borrow_mut().input.as_mut() {
            if input.kind == InputKind::File {
                input.files = files;
            }
        }
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<MemoryElement> {
        self.0.borrow().parent.upgrade().map(MemoryElement)
    }

    /// Whether `self` is `other` or lies somewhere below it.
    fn is_inclusive_descendant_of(&self, other: &MemoryElement) -> bool {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node == *other {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Append `child` as the last child of this element.
    ///
    /// A child that is already attached elsewhere is moved, not copied.
    /// Appending an element into itself or into one of its descendants is a
    /// `HierarchyRequestError`, as in the DOM.
    pub fn append_child(&self, child: &MemoryElement) -> Result<()> {
        if self.is_inclusive_descendant_of(child) {
            return Err(Error::Host(format!(
                "HierarchyRequestError: <{}> cannot be appended inside itself",
                child.tag()
            )));
        }

        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    /// Remove this element from its parent, if it has one.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent
                .0
                .borrow_mut()
                .children
                .retain(|sibling| sibling != self);
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn find_by_id(&self, id: &str) -> Option<MemoryElement> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }
}

/// View of an element that is an input control.
#[derive(Debug, Clone)]
pub struct MemoryInput(MemoryElement);

impl Capability<MemoryElement> for MemoryInput {
    fn narrow(handle: MemoryElement) -> Option<Self> {
        handle.input_kind().map(|_| MemoryInput(handle))
    }
}

impl CheckedState for MemoryInput {
    fn is_checked(&self) -> bool {
        self.0.checked().unwrap_or(false)
    }
}

impl FileSelection for MemoryInput {
    type File = MemoryFile;

    fn first_file(&self) -> Option<MemoryFile> {
        let node = self.0 .0.borrow();
        let input = node.input.as_ref()?;
        if input.kind != InputKind::File {
            return None;
        }
        input.files.first().cloned()
    }
}

/// View of an element in the HTML namespace.
#[derive(Debug, Clone)]
pub struct MemoryHtmlElement(MemoryElement);

impl Capability<MemoryElement> for MemoryHtmlElement {
    fn narrow(handle: MemoryElement) -> Option<Self> {
        (handle.namespace() == Namespace::Html).then(|| MemoryHtmlElement(handle))
    }
}

impl HiddenFlag for MemoryHtmlElement {
    fn is_hidden(&self) -> bool {
        self.0.hidden()
    }

    fn put_hidden(&self, hidden: bool) {
        self.0.set_hidden(hidden);
    }
}

/// A page held entirely in memory, rooted at `<body>`.
#[derive(Debug)]
pub struct MemoryPage {
    body: MemoryElement,
    blobs: RefCell<HashMap<String, MemoryBlob>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            body: MemoryElement::new("body", Namespace::Html, None),
            blobs: RefCell::new(HashMap::new()),
        }
    }

    pub fn body(&self) -> MemoryElement {
        self.body.clone()
    }

    /// Create a detached HTML element.
    pub fn create_element(&self, tag: &str) -> MemoryElement {
        let tag = tag.to_ascii_lowercase();
        let input = (tag == "input").then(|| InputState {
            kind: InputKind::Text,
            checked: false,
            files: Vec::new(),
        });
        MemoryElement::new(&tag, Namespace::Html, input)
    }

    /// Create a detached `<input>` of the given kind.
    pub fn create_input(&self, kind: InputKind) -> MemoryElement {
        MemoryElement::new(
            "input",
            Namespace::Html,
            Some(InputState {
                kind,
                checked: false,
                files: Vec::new(),
            }),
        )
    }

    /// Create a detached element in the SVG namespace.
    pub fn create_svg_element(&self, tag: &str) -> MemoryElement {
        MemoryElement::new(tag, Namespace::Svg, None)
    }

    /// Payload behind a live object URL.
    pub fn dereference_object_url(&self, url: &str) -> Option<MemoryBlob> {
        self.blobs.borrow().get(url).cloned()
    }

    /// Number of object URLs created and not yet revoked.
    pub fn live_object_urls(&self) -> usize {
        self.blobs.borrow().len()
    }
}

impl RenderTree for MemoryPage {
    type Handle = MemoryElement;
    type Checkbox = MemoryInput;
    type Visible = MemoryHtmlElement;
    type FileInput = MemoryInput;
    type File = MemoryFile;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.body.find_by_id(id)
    }

    fn create_object_url(&self, payload: &[u8], mime_type: &str) -> Result<String> {
        let url = format!("blob:page-utils/{}", Uuid::new_v4());
        self.blobs.borrow_mut().insert(
            url.clone(),
            MemoryBlob {
                mime_type: mime_type.to_string(),
                bytes: payload.to_vec(),
            },
        );
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(url);
        Ok(())
    }

    fn append_download_link(
        &self,
        zone: &MemoryElement,
        href: &str,
        file_name: &str,
    ) -> Result<()> {
        let anchor = self.create_element("a");
        anchor.set_text(file_name);
        anchor.set_attribute("href", href);
        anchor.set_attribute("download", file_name);

        let item = self.create_element("li");
        item.append_child(&anchor)?;

        zone.append_child(&item)
    }
}
