//! Text extraction from XHTML content documents.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How document content is handed to the tokenizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Reduce XHTML to its text content
    #[default]
    Strip,
    /// Pass the decoded XHTML through unchanged, tags included
    Raw,
}

/// Elements whose content is never part of the text.
fn is_skipped(name: &[u8]) -> bool {
    matches!(name, b"head" | b"script" | b"style" | b"svg")
}

/// Elements that separate words even without surrounding whitespace.
fn is_block(name: &[u8]) -> bool {
    matches!(
        name,
        b"address"
            | b"article"
            | b"aside"
            | b"blockquote"
            | b"body"
            | b"br"
            | b"dd"
            | b"div"
            | b"dl"
            | b"dt"
            | b"figcaption"
            | b"figure"
            | b"footer"
            | b"h1"
            | b"h2"
            | b"h3"
            | b"h4"
            | b"h5"
            | b"h6"
            | b"header"
            | b"hr"
            | b"li"
            | b"nav"
            | b"ol"
            | b"p"
            | b"pre"
            | b"section"
            | b"table"
            | b"td"
            | b"th"
            | b"tr"
            | b"ul"
    )
}

/// Resolve the HTML named entities that show up in e-book markup.
fn resolve_entity(name: &str) -> Option<&'static str> {
    let value = match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "ensp" => "\u{2002}",
        "emsp" => "\u{2003}",
        "thinsp" => "\u{2009}",
        "shy" | "zwnj" | "zwj" => "",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "laquo" => "«",
        "raquo" => "»",
        "middot" => "·",
        "bull" => "•",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "aacute" => "á",
        "agrave" => "à",
        "acirc" => "â",
        "auml" => "ä",
        "atilde" => "ã",
        "aring" => "å",
        "aelig" => "æ",
        "ccedil" => "ç",
        "eacute" => "é",
        "egrave" => "è",
        "ecirc" => "ê",
        "euml" => "ë",
        "iacute" => "í",
        "igrave" => "ì",
        "icirc" => "î",
        "iuml" => "ï",
        "ntilde" => "ñ",
        "oacute" => "ó",
        "ograve" => "ò",
        "ocirc" => "ô",
        "ouml" => "ö",
        "otilde" => "õ",
        "oslash" => "ø",
        "oelig" => "œ",
        "uacute" => "ú",
        "ugrave" => "ù",
        "ucirc" => "û",
        "uuml" => "ü",
        "yacute" => "ý",
        "yuml" => "ÿ",
        "szlig" => "ß",
        "Aacute" => "Á",
        "Agrave" => "À",
        "Acirc" => "Â",
        "Auml" => "Ä",
        "Ccedil" => "Ç",
        "Eacute" => "É",
        "Egrave" => "È",
        "Ecirc" => "Ê",
        "Iacute" => "Í",
        "Ntilde" => "Ñ",
        "Oacute" => "Ó",
        "Ouml" => "Ö",
        "Uacute" => "Ú",
        "Uuml" => "Ü",
        _ => return None,
    };
    Some(value)
}

fn push_break(text: &mut String) {
    if !text.is_empty() && !text.ends_with(char::is_whitespace) {
        text.push('\n');
    }
}

/// Append character data, dropping soft hyphens so hyphenated-for-layout
/// words stay whole.
fn push_text(text: &mut String, content: &str) {
    text.extend(content.chars().filter(|&c| c != '\u{ad}'));
}

/// Extract the readable text of an XHTML document.
///
/// Character data is kept in document order. `head`, `script`, `style` and
/// inline `svg` content is skipped, block-level element boundaries become
/// line breaks, and XML/HTML entities are resolved. Named entities that are
/// not recognized become a space. Mismatched end tags and unclosed HTML void
/// elements (`<meta charset="utf-8">`) are tolerated.
///
/// # Examples
///
/// ```
/// use glossa::epub::text::extract_text;
///
/// let text = extract_text("<html><head><title>T</title></head>\
///     <body><p>Caf&eacute; au lait</p><p>Fin</p></body></html>").unwrap();
/// assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["Café", "au", "lait", "Fin"]);
/// ```
pub fn extract_text(markup: &str) -> Result<String> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;

    let mut text = String::with_capacity(markup.len() / 2);
    // Name of the element being skipped and how deeply it is nested in itself.
    // Only that name opens or closes the skipped region, so unclosed void
    // elements inside it cannot swallow the rest of the document.
    let mut skipping: Option<(Vec<u8>, usize)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                match &mut skipping {
                    Some((skipped, depth)) => {
                        if skipped.as_slice() == name.as_ref() {
                            *depth += 1;
                        }
                    }
                    None if is_skipped(name.as_ref()) => {
                        skipping = Some((name.as_ref().to_vec(), 1));
                    }
                    None if is_block(name.as_ref()) => push_break(&mut text),
                    None => {}
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                match &mut skipping {
                    Some((skipped, depth)) => {
                        if skipped.as_slice() == name.as_ref() {
                            *depth -= 1;
                            if *depth == 0 {
                                skipping = None;
                            }
                        }
                    }
                    None if is_block(name.as_ref()) => push_break(&mut text),
                    None => {}
                }
            }
            Event::Empty(e) => {
                if skipping.is_none() && is_block(e.local_name().as_ref()) {
                    push_break(&mut text);
                }
            }
            Event::Text(t) if skipping.is_none() => {
                let content = t
                    .unescape_with(|entity| resolve_entity(entity).or(Some(" ")))
                    .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned().into());
                push_text(&mut text, &content);
            }
            Event::CData(c) if skipping.is_none() => {
                push_text(&mut text, &String::from_utf8_lossy(&c));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Produce the content handed to the tokenizer for one document.
pub fn document_content(markup: &str, mode: MarkupMode) -> Result<Cow<'_, str>> {
    match mode {
        MarkupMode::Strip => Ok(Cow::Owned(extract_text(markup)?)),
        MarkupMode::Raw => Ok(Cow::Borrowed(markup)),
    }
}
