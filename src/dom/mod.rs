//! Element references and the render tree seam.
//!
//! Every accessor goes through [`resolve`]: an [`ElementRef`] is looked up
//! in a [`RenderTree`] and narrowed to the capability the accessor needs.
//! A reference that names nothing, or an element lacking the capability,
//! resolves to `None`.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::Result;

pub use memory::{MemoryElement, MemoryFile, MemoryPage};
#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;

/// A page element named either by its id or by a handle to it.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementRef<H> {
    Identifier(String),
    Handle(H),
}

impl<H> ElementRef<H> {
    /// Reference an element by id.
    pub fn id(id: impl Into<String>) -> Self {
        ElementRef::Identifier(id.into())
    }

    /// Reference an element through a handle already held by the caller.
    pub fn handle(handle: H) -> Self {
        ElementRef::Handle(handle)
    }
}

impl<H> From<&str> for ElementRef<H> {
    fn from(id: &str) -> Self {
        ElementRef::Identifier(id.to_string())
    }
}

impl<H> From<String> for ElementRef<H> {
    fn from(id: String) -> Self {
        ElementRef::Identifier(id)
    }
}

/// A typed view of an element, obtained only if the element supports it.
pub trait Capability<H>: Sized {
    fn narrow(handle: H) -> Option<Self>;
}

/// Elements with a checked state (input controls).
pub trait CheckedState {
    fn is_checked(&self) -> bool;
}

/// Elements with a hidden flag (HTML elements).
pub trait HiddenFlag {
    fn is_hidden(&self) -> bool;
    fn put_hidden(&self, hidden: bool);
}

/// Elements that may carry a list of selected files.
pub trait FileSelection {
    type File;

    /// First selected file, if the control has a file list and it is non-empty.
    fn first_file(&self) -> Option<Self::File>;
}

/// A live tree of page elements.
///
/// Implementations hand out cheap, clonable handles that stay attached to
/// the tree: reading through a handle always observes the current state.
pub trait RenderTree {
    type Handle: Clone;
    type Checkbox: Capability<Self::Handle> + CheckedState;
    type Visible: Capability<Self::Handle> + HiddenFlag;
    type FileInput: Capability<Self::Handle> + FileSelection<File = Self::File>;
    type File;

    /// First element in document order with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Wrap `payload` in a blob of `mime_type` and return a URL that
    /// dereferences to it.
    fn create_object_url(&self, payload: &[u8], mime_type: &str) -> Result<String>;

    /// Release a URL obtained from [`RenderTree::create_object_url`].
    fn revoke_object_url(&self, url: &str) -> Result<()>;

    /// Append `<li><a href="{href}" download="{file_name}">{file_name}</a></li>` to `zone`.
    fn append_download_link(&self, zone: &Self::Handle, href: &str, file_name: &str)
        -> Result<()>;
}

/// Look up `elem` and narrow it to capability `C`.
pub fn resolve<T, C>(tree: &T, elem: &ElementRef<T::Handle>) -> Option<C>
where
    T: RenderTree + ?Sized,
    C: Capability<T::Handle>,
{
    let handle = match elem {
        ElementRef::Identifier(id) => tree.element_by_id(id)?,
        ElementRef::Handle(handle) => handle.clone(),
    };
    C::narrow(handle)
}
