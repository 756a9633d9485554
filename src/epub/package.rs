//! OPF package document parsing.
//!
//! Only the parts the vocabulary extractor needs are read: the title, the
//! manifest (in document order) and the spine.

use log::warn;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::epub::attribute;
use crate::error::Result;

/// Coarse classification of a manifest item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// XHTML content document
    Document,
    /// EPUB 3 navigation document or NCX table of contents
    Navigation,
    /// Stylesheet
    Style,
    /// Raster or vector image
    Image,
    /// Embedded font
    Font,
    /// Anything else
    Other,
}

/// An entry of the package manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestItem {
    pub id: String,
    /// The href as written in the manifest
    pub href: String,
    pub media_type: String,
    pub properties: Vec<String>,
    /// Archive path of the resource
    pub path: String,
}

impl ManifestItem {
    /// Classify this item by media type and properties.
    pub fn kind(&self) -> ItemKind {
        if self.properties.iter().any(|p| p == "nav") {
            return ItemKind::Navigation;
        }

        match self.media_type.as_str() {
            "application/xhtml+xml" | "text/html" => ItemKind::Document,
            "application/x-dtbncx+xml" => ItemKind::Navigation,
            "text/css" => ItemKind::Style,
            media if media.starts_with("image/") => ItemKind::Image,
            media
                if media.starts_with("font/")
                    || media.starts_with("application/font")
                    || media.starts_with("application/x-font")
                    || media == "application/vnd.ms-opentype" =>
            {
                ItemKind::Font
            }
            _ => ItemKind::Other,
        }
    }

    /// Check if this item is a content document.
    pub fn is_document(&self) -> bool {
        self.kind() == ItemKind::Document
    }

    /// Check if this item is the EPUB 3 navigation document.
    ///
    /// Unlike the NCX, the navigation document is XHTML with readable text.
    pub fn is_navigation_document(&self) -> bool {
        self.properties.iter().any(|p| p == "nav")
            && matches!(
                self.media_type.as_str(),
                "application/xhtml+xml" | "text/html"
            )
    }
}

/// The parsed package document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Package {
    pub title: Option<String>,
    pub manifest: Vec<ManifestItem>,
    /// Manifest ids in reading order
    pub spine: Vec<String>,
}

impl Package {
    /// Parse an OPF document located at `package_path` inside the archive.
    pub fn parse(opf: &str, package_path: &str) -> Result<Self> {
        let base_dir = match package_path.rfind('/') {
            Some(slash) => &package_path[..=slash],
            None => "",
        };

        let mut reader = Reader::from_str(opf);
        reader.config_mut().trim_text(true);

        let mut package = Package::default();
        let mut in_title = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                    b"item" => {
                        let (Some(id), Some(href)) = (attribute(&e, "id")?, attribute(&e, "href")?)
                        else {
                            warn!("skipping manifest item without id or href");
                            continue;
                        };
                        let media_type = attribute(&e, "media-type")?.unwrap_or_default();
                        let properties = attribute(&e, "properties")?
                            .map(|p| p.split_whitespace().map(str::to_string).collect())
                            .unwrap_or_default();
                        let path = resolve_href(base_dir, &href);
                        package.manifest.push(ManifestItem {
                            id,
                            href,
                            media_type,
                            properties,
                            path,
                        });
                    }
                    b"itemref" => {
                        if let Some(idref) = attribute(&e, "idref")? {
                            package.spine.push(idref);
                        }
                    }
                    b"title" if package.title.is_none() => in_title = true,
                    _ => {}
                },
                Event::Text(t) if in_title => {
                    let title = t.unescape()?.trim().to_string();
                    if !title.is_empty() {
                        package.title = Some(title);
                    }
                }
                Event::End(e) if e.local_name().as_ref() == b"title" => in_title = false,
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(package)
    }

    /// Look up a manifest item by id.
    pub fn item(&self, id: &str) -> Option<&ManifestItem> {
        self.manifest.iter().find(|item| item.id == id)
    }
}

/// Resolve a manifest href against the package directory.
///
/// Fragments are dropped and `.`/`..` segments collapsed. A `..` that would
/// climb above the archive root is ignored.
pub fn resolve_href(base_dir: &str, href: &str) -> String {
    let href = href.split('#').next().unwrap_or_default();
    let mut segments: Vec<&str> = Vec::new();

    for segment in base_dir.split('/').chain(href.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
