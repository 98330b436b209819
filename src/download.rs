//! Client-side downloads of in-memory bytes.
//!
//! A download is a `<li><a href="blob:..." download="name">name</a></li>`
//! entry in the page's download zone. The browser serves the bytes when the
//! user follows the link.

use crate::dom::RenderTree;
use crate::error::{Error, Result};
use crate::page::Page;

/// What [`Page::put_download`] appended to the download zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRecord {
    pub file_name: String,
    /// Object URL the link points at. Still live: it is never revoked here.
    pub url: String,
}

impl<T: RenderTree> Page<T> {
    /// Offer `data` for download as `file_name`.
    ///
    /// Either the link is appended to the download zone or nothing changes.
    /// The object URL is left alive on success; callers that need the memory
    /// back pass [`DownloadRecord::url`] to [`RenderTree::revoke_object_url`].
    pub fn put_download(&self, data: &[u8], file_name: &str) -> Result<DownloadRecord> {
        let zone_id = &self.config().elements.download_zone;
        let zone = self
            .tree()
            .element_by_id(zone_id)
            .ok_or_else(|| Error::MissingElement(zone_id.clone()))?;

        let url = self
            .tree()
            .create_object_url(data, &self.config().download.mime_type)?;

        if let Err(e) = self.tree().append_download_link(&zone, &url, file_name) {
            if let Err(revoke_err) = self.tree().revoke_object_url(&url) {
                tracing::warn!("Failed to revoke {} after aborted download: {}", url, revoke_err);
            }
            return Err(e);
        }

        tracing::info!(file_name, bytes = data.len(), "Download link added");

        Ok(DownloadRecord {
            file_name: file_name.to_string(),
            url,
        })
    }

    /// Release the object URL behind a download link.
    ///
    /// The link itself stays in the download zone but stops working.
    pub fn revoke_download(&self, record: &DownloadRecord) -> Result<()> {
        self.tree().revoke_object_url(&record.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::dom::memory::{
        MemoryElement, MemoryFile, MemoryHtmlElement, MemoryInput, MemoryPage,
    };

    /// Memory tree whose download links can never be attached.
    struct RejectingAppends(MemoryPage);

    impl RenderTree for RejectingAppends {
        type Handle = MemoryElement;
        type Checkbox = MemoryInput;
        type Visible = MemoryHtmlElement;
        type FileInput = MemoryInput;
        type File = MemoryFile;

        fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
            self.0.element_by_id(id)
        }

        fn create_object_url(&self, payload: &[u8], mime_type: &str) -> Result<String> {
            self.0.create_object_url(payload, mime_type)
        }

        fn revoke_object_url(&self, url: &str) -> Result<()> {
            self.0.revoke_object_url(url)
        }

        fn append_download_link(
            &self,
            _zone: &MemoryElement,
            _href: &str,
            _file_name: &str,
        ) -> Result<()> {
            Err(Error::Host("QuotaExceededError: append refused".to_string()))
        }
    }

    fn page_with_zone() -> Page<MemoryPage> {
        let tree = MemoryPage::new();
        let zone = tree.create_element("ul").with_id("download_zone");
        tree.body().append_child(&zone).unwrap();
        Page::with_defaults(tree)
    }

    #[test]
    fn test_put_download_appends_one_entry() {
        let page = page_with_zone();

        let record = page.put_download(b"hello", "greeting.txt").unwrap();
        assert_eq!(record.file_name, "greeting.txt");

        let zone = page.tree().element_by_id("download_zone").unwrap();
        let items = zone.children();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tag(), "li");

        let links = items[0].children();
        assert_eq!(links.len(), 1);
        let link = &links[0];
        assert_eq!(link.tag(), "a");
        assert_eq!(link.text(), "greeting.txt");
        assert_eq!(link.attribute("download").as_deref(), Some("greeting.txt"));
        assert_eq!(link.attribute("href").as_deref(), Some(record.url.as_str()));

        let blob = page.tree().dereference_object_url(&record.url).unwrap();
        assert_eq!(blob.bytes, b"hello");
        assert_eq!(blob.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_each_download_gets_its_own_entry() {
        let page = page_with_zone();

        let first = page.put_download(&[1, 2, 3], "save.eep").unwrap();
        let second = page.put_download(&[4, 5], "save.mpk").unwrap();
        assert_ne!(first.url, second.url);

        let zone = page.tree().element_by_id("download_zone").unwrap();
        let labels: Vec<String> = zone
            .children()
            .iter()
            .map(|item| item.children()[0].text())
            .collect();
        assert_eq!(labels, vec!["save.eep", "save.mpk"]);
    }

    #[test]
    fn test_object_url_stays_alive_after_download() {
        let page = page_with_zone();

        let record = page.put_download(b"data", "x.bin").unwrap();
        assert_eq!(page.tree().live_object_urls(), 1);

        page.revoke_download(&record).unwrap();
        assert_eq!(page.tree().live_object_urls(), 0);
    }

    #[test]
    fn test_missing_zone_creates_nothing() {
        let page = Page::with_defaults(MemoryPage::new());

        let err = page.put_download(b"hello", "greeting.txt").unwrap_err();
        assert!(matches!(err, Error::MissingElement(ref id) if id == "download_zone"));
        assert_eq!(page.tree().live_object_urls(), 0);
    }

    #[test]
    fn test_failed_append_revokes_url() {
        let inner = MemoryPage::new();
        let zone = inner.create_element("ul").with_id("download_zone");
        inner.body().append_child(&zone).unwrap();
        let page = Page::with_defaults(RejectingAppends(inner));

        assert!(matches!(
            page.put_download(b"hello", "greeting.txt"),
            Err(Error::Host(_))
        ));
        assert_eq!(page.tree().0.live_object_urls(), 0);
        assert!(zone.children().is_empty());
    }

    #[test]
    fn test_configured_zone_and_mime_type() {
        let tree = MemoryPage::new();
        let zone = tree.create_element("ol").with_id("saves");
        tree.body().append_child(&zone).unwrap();

        let mut config = PageConfig::default();
        config.elements.download_zone = "saves".to_string();
        config.download.mime_type = "application/x-n64-save".to_string();
        let page = Page::new(tree, config);

        let record = page.put_download(&[0xff; 4], "game.srm").unwrap();
        let blob = page.tree().dereference_object_url(&record.url).unwrap();
        assert_eq!(blob.mime_type, "application/x-n64-save");
        assert_eq!(zone.children().len(), 1);
    }
}
