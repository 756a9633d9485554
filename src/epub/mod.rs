//! EPUB document source.
//!
//! An EPUB is a ZIP archive holding an OCF container document
//! (`META-INF/container.xml`) that points at an OPF package document, which
//! in turn lists every resource of the book in its manifest.
//!
//! [`EpubBook`] opens the archive, parses both documents and hands out the
//! decoded content of each XHTML content document, in manifest order.
//!
//! ```text
//! book.epub ──▶ container.xml ──▶ content.opf ──▶ manifest items ──▶ content strings
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use glossa::epub::{EpubBook, MarkupMode};
//!
//! let book = EpubBook::open("novel.epub")?;
//! println!("{:?}", book.title());
//! for text in book.document_texts(MarkupMode::Strip)? {
//!     println!("{} bytes of text", text.len());
//! }
//! # Ok::<(), glossa::error::GlossaError>(())
//! ```

pub mod container;
pub mod package;
pub mod text;

pub use package::{ItemKind, ManifestItem, Package};
pub use text::{MarkupMode, extract_text};

use std::cell::RefCell;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use log::{debug, info, warn};
use quick_xml::events::BytesStart;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{GlossaError, Result};

const EPUB_MIMETYPE: &str = "application/epub+zip";

/// Upper bound on the buffer reserved from an entry's declared size.
const MAX_PREALLOCATION: u64 = 1 << 24;

/// Read an attribute value, unescaped, by qualified name.
pub(crate) fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>> {
    let mut entry = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => GlossaError::epub(format!("{name} is missing from the archive")),
        other => GlossaError::from(other),
    })?;
    let mut bytes = Vec::with_capacity(preallocation(entry.size()));
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Buffer size to reserve for an entry; the size in the archive header is not
/// trusted beyond [`MAX_PREALLOCATION`].
fn preallocation(declared: u64) -> usize {
    declared.min(MAX_PREALLOCATION) as usize
}

/// Decode entry bytes as UTF-8, replacing invalid sequences.
fn decode(name: &str, bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{name} is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// An opened EPUB book.
pub struct EpubBook<R = File> {
    archive: RefCell<ZipArchive<R>>,
    package_path: String,
    package: Package,
    include_navigation: bool,
}

impl EpubBook<File> {
    /// Open an EPUB file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        Self::from_reader(File::open(path)?)
    }
}

impl<R: Read + Seek> EpubBook<R> {
    /// Read an EPUB from any seekable source.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        match read_entry(&mut archive, "mimetype") {
            Ok(bytes) if bytes.trim_ascii() != EPUB_MIMETYPE.as_bytes() => {
                warn!("unexpected mimetype entry, reading the archive anyway");
            }
            Err(_) => warn!("archive has no mimetype entry, reading it anyway"),
            Ok(_) => {}
        }

        let container = decode(
            container::CONTAINER_PATH,
            read_entry(&mut archive, container::CONTAINER_PATH)?,
        );
        let package_path = container::rootfile_path(&container)?;
        let opf = decode(&package_path, read_entry(&mut archive, &package_path)?);
        let package = Package::parse(&opf, &package_path)?;

        info!(
            "loaded {:?}: {} manifest items, {} in spine",
            package.title.as_deref().unwrap_or("untitled"),
            package.manifest.len(),
            package.spine.len()
        );

        Ok(EpubBook {
            archive: RefCell::new(archive),
            package_path,
            package,
            include_navigation: false,
        })
    }

    /// Treat the EPUB 3 navigation document as a content document.
    ///
    /// Off by default, so table-of-contents entries are not counted.
    pub fn with_navigation(mut self, include: bool) -> Self {
        self.include_navigation = include;
        self
    }

    /// The book title, if the package declares one.
    pub fn title(&self) -> Option<&str> {
        self.package.title.as_deref()
    }

    /// Archive path of the package document.
    pub fn package_path(&self) -> &str {
        &self.package_path
    }

    /// All manifest items in manifest order.
    pub fn manifest(&self) -> &[ManifestItem] {
        &self.package.manifest
    }

    /// Content documents in manifest order.
    ///
    /// The navigation document is included only when enabled with
    /// [`EpubBook::with_navigation`].
    pub fn documents(&self) -> impl Iterator<Item = &ManifestItem> {
        self.package.manifest.iter().filter(move |item| {
            item.is_document() || (self.include_navigation && item.is_navigation_document())
        })
    }

    /// Manifest items in reading order.
    ///
    /// Spine entries that reference no manifest item are skipped.
    pub fn spine(&self) -> Vec<&ManifestItem> {
        self.package
            .spine
            .iter()
            .filter_map(|idref| {
                let item = self.package.item(idref);
                if item.is_none() {
                    warn!("spine references unknown item {idref}");
                }
                item
            })
            .collect()
    }

    /// Read and decode the content of a manifest item.
    pub fn read_document(&self, item: &ManifestItem) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let bytes = read_entry(&mut *archive, &item.path)?;
        Ok(decode(&item.path, bytes))
    }

    /// The content of every content document, in manifest order.
    pub fn document_texts(&self, markup: MarkupMode) -> Result<Vec<String>> {
        self.documents()
            .map(|item| {
                let content = self.read_document(item)?;
                let text = text::document_content(&content, markup)?.into_owned();
                debug!("{}: {} bytes of text", item.path, text.len());
                Ok(text)
            })
            .collect()
    }

    /// Tokenize every content document, concatenating the token texts in
    /// manifest order.
    pub fn tokens(&self, tokenizer: &dyn Tokenizer, markup: MarkupMode) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for text in self.document_texts(markup)? {
            tokens.extend(tokenizer.tokenize(&text)?.map(|token| token.text));
        }
        debug!("{} tokens from {} documents", tokens.len(), self.documents().count());
        Ok(tokens)
    }
}
