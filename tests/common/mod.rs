//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTAINER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

/// Wrap paragraphs in a minimal XHTML content document.
pub fn xhtml(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<p>{p}</p>\n")).collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<head><title>{title}</title><style>p {{ text-indent: 1em; }}</style></head>
<body>
{body}</body>
</html>"#
    )
}

/// Write an EPUB with one content document per chapter, listed in the
/// manifest in the given order.
pub fn write_epub(dir: &Path, name: &str, title: &str, chapters: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = ZipWriter::new(File::create(&path).unwrap());

    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file("mimetype", stored).unwrap();
    writer.write_all(b"application/epub+zip").unwrap();

    writer
        .start_file("META-INF/container.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(CONTAINER.as_bytes()).unwrap();

    let mut manifest = String::new();
    let mut spine = String::new();
    for index in 0..chapters.len() {
        manifest.push_str(&format!(
            r#"<item id="ch{index}" href="text/ch{index}.xhtml" media-type="application/xhtml+xml"/>"#
        ));
        spine.push_str(&format!(r#"<itemref idref="ch{index}"/>"#));
    }
    let opf = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="uid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:identifier id="uid">urn:uuid:glossa-test</dc:identifier>
    <dc:title>{title}</dc:title>
  </metadata>
  <manifest>
    <item id="nav" href="nav.xhtml" media-type="application/xhtml+xml" properties="nav"/>
    <item id="css" href="style.css" media-type="text/css"/>
    {manifest}
  </manifest>
  <spine>{spine}</spine>
</package>"#
    );
    writer
        .start_file("OEBPS/content.opf", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(opf.as_bytes()).unwrap();

    writer
        .start_file("OEBPS/nav.xhtml", SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(xhtml("Contents", &["Contents Contents Contents"]).as_bytes())
        .unwrap();

    writer
        .start_file("OEBPS/style.css", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"p { margin: 0; }").unwrap();

    for (index, chapter) in chapters.iter().enumerate() {
        writer
            .start_file(format!("OEBPS/text/ch{index}.xhtml"), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(chapter.as_bytes()).unwrap();
    }

    writer.finish().unwrap();
    path
}
