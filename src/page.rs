//! A render tree paired with the configuration that names its fixed elements.

use crate::config::PageConfig;
use crate::dom::RenderTree;

/// Entry point for the element helpers.
///
/// `Page` holds no element state of its own: every operation looks its
/// element up again, so it always sees the tree as it is at that moment.
#[derive(Debug, Clone)]
pub struct Page<T> {
    tree: T,
    config: PageConfig,
}

impl<T: RenderTree> Page<T> {
    pub fn new(tree: T, config: PageConfig) -> Self {
        Self { tree, config }
    }

    /// Page using the default element identifiers.
    pub fn with_defaults(tree: T) -> Self {
        Self::new(tree, PageConfig::default())
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn into_tree(self) -> T {
        self.tree
    }
}
