//! `META-INF/container.xml` parsing.

use log::debug;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::epub::attribute;
use crate::error::{GlossaError, Result};

/// Archive path of the OCF container document.
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

const PACKAGE_MEDIA_TYPE: &str = "application/oebps-package+xml";

/// Find the archive path of the package document.
///
/// Returns the first `rootfile` whose media type is the OPF package type,
/// falling back to the first `rootfile` that declares no media type.
pub fn rootfile_path(container_xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(container_xml);
    reader.config_mut().trim_text(true);

    let mut fallback = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"rootfile" => {
                let Some(full_path) = attribute(&e, "full-path")? else {
                    continue;
                };
                match attribute(&e, "media-type")?.as_deref() {
                    Some(PACKAGE_MEDIA_TYPE) => {
                        debug!("package document at {full_path}");
                        return Ok(full_path);
                    }
                    None if fallback.is_none() => fallback = Some(full_path),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    fallback.ok_or_else(|| GlossaError::epub(format!("no rootfile declared in {CONTAINER_PATH}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rootfile_path() {
        let xml = r#"<?xml version="1.0"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

        assert_eq!(rootfile_path(xml).unwrap(), "OEBPS/content.opf");
    }

    #[test]
    fn test_rootfile_prefers_package_media_type() {
        let xml = r#"<container><rootfiles>
    <rootfile full-path="other.pdf" media-type="application/pdf"/>
    <rootfile full-path="book.opf" media-type="application/oebps-package+xml"/>
</rootfiles></container>"#;

        assert_eq!(rootfile_path(xml).unwrap(), "book.opf");
    }

    #[test]
    fn test_missing_rootfile() {
        let xml = "<container><rootfiles/></container>";
        match rootfile_path(xml) {
            Err(GlossaError::Epub(msg)) => assert!(msg.contains("rootfile")),
            other => panic!("expected EPUB error, got {other:?}"),
        }
    }
}
