//! page-utils - DOM accessor helpers for a browser page
//!
//! Small helpers a WebAssembly page uses to talk to its markup.
//!
//! # Features
//!
//! - Read a checkbox's checked state
//! - Read and set an element's hidden flag
//! - Read the first file selected in a file input
//! - Offer in-memory bytes as a download link in the page's download zone
//!
//! Element lookups never fail loudly: a missing element, or one of the wrong
//! kind, reads as `false` / `None` and writes nothing.
//!
//! The same operations run against the live browser document
//! (`dom::web`, wasm32 only) or against [`MemoryPage`], an in-memory tree for
//! hosts without a browser.
//!
//! # Example
//!
//! ```
//! use page_utils::{InputKind, MemoryPage, Page};
//!
//! let tree = MemoryPage::new();
//! let zone = tree.create_element("ul").with_id("download_zone");
//! tree.body().append_child(&zone).unwrap();
//! let swap = tree.create_input(InputKind::Checkbox).with_id("swap_bytes");
//! tree.body().append_child(&swap).unwrap();
//!
//! let page = Page::with_defaults(tree);
//! assert!(!page.get_swap_bytes());
//!
//! let record = page.put_download(b"hello", "greeting.txt").unwrap();
//! assert_eq!(zone.children().len(), 1);
//! assert_eq!(page.tree().dereference_object_url(&record.url).unwrap().bytes, b"hello");
//! ```

mod accessors;
pub mod config;
pub mod dom;
pub mod download;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod exports;
pub mod logging;
pub mod naming;
pub mod page;

// Re-exports for convenience
pub use config::{validate_config, PageConfig};
pub use dom::memory::{InputKind, MemoryElement, MemoryFile, MemoryPage};
pub use dom::{resolve, ElementRef, RenderTree};
pub use download::DownloadRecord;
pub use error::{Error, Result};
pub use naming::with_extension;
pub use page::Page;

#[cfg(target_arch = "wasm32")]
pub use dom::web::{read_file, WebDocument};
