//! Checked-state, visibility and file-input accessors.
//!
//! None of these fail. A reference that does not resolve to an element with
//! the needed capability reads as `false` / `None` and writes nothing.

use crate::dom::{resolve, CheckedState, ElementRef, FileSelection, HiddenFlag, RenderTree};
use crate::page::Page;

impl<T: RenderTree> Page<T> {
    /// Whether `elem` is an input control that is currently checked.
    pub fn get_checked(&self, elem: impl Into<ElementRef<T::Handle>>) -> bool {
        let elem = elem.into();
        match resolve::<T, T::Checkbox>(self.tree(), &elem) {
            Some(input) => input.is_checked(),
            None => {
                log_unresolved(&elem, "checked state");
                false
            }
        }
    }

    /// Checked state of the swap-bytes checkbox.
    pub fn get_swap_bytes(&self) -> bool {
        let id = self.config().elements.swap_bytes.clone();
        self.get_checked(ElementRef::Identifier(id))
    }

    pub fn set_hidden(&self, elem: impl Into<ElementRef<T::Handle>>, hidden: bool) {
        let elem = elem.into();
        match resolve::<T, T::Visible>(self.tree(), &elem) {
            Some(element) => element.put_hidden(hidden),
            None => log_unresolved(&elem, "hidden flag"),
        }
    }

    pub fn get_hidden(&self, elem: impl Into<ElementRef<T::Handle>>) -> bool {
        let elem = elem.into();
        match resolve::<T, T::Visible>(self.tree(), &elem) {
            Some(element) => element.is_hidden(),
            None => {
                log_unresolved(&elem, "hidden flag");
                false
            }
        }
    }

    /// First file selected in the file control `elem`.
    ///
    /// An empty selection is a normal outcome and also yields `None`.
    pub fn get_file(&self, elem: impl Into<ElementRef<T::Handle>>) -> Option<T::File> {
        let elem = elem.into();
        match resolve::<T, T::FileInput>(self.tree(), &elem) {
            Some(input) => input.first_file(),
            None => {
                log_unresolved(&elem, "file list");
                None
            }
        }
    }
}

fn log_unresolved<H>(elem: &ElementRef<H>, capability: &str) {
    match elem {
        ElementRef::Identifier(id) => {
            tracing::debug!("#{} does not resolve to an element with a {}", id, capability)
        }
        ElementRef::Handle(_) => {
            tracing::debug!("element handle does not expose a {}", capability)
        }
    }
}
