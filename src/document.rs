//! SVG document reading
//!
//! Walks an SVG document with quick-xml and collects every `<path>` element
//! in the SVG namespace, keeping only its `id` and `d` attributes. All other
//! content is ignored.

use encoding_rs::{Encoding, UTF_8};
use quick_xml::escape::{EscapeError, unescape};
use quick_xml::events::attributes::{AttrError, Attribute};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::{NsReader, Reader};
use std::borrow::Cow;

/// Namespace URI a `<path>` must be bound to
pub const SVG_NAMESPACE: &[u8] = b"http://www.w3.org/2000/svg";

/// Errors that make a whole document unusable
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),
    #[error("attribute `{name}` is not valid UTF-8")]
    AttributeEncoding { name: String },
    #[error("invalid escape in attribute `{name}`: {source}")]
    Escape {
        name: String,
        #[source]
        source: EscapeError,
    },
    #[error("unknown encoding `{label}`")]
    UnknownEncoding { label: String },
    #[error("document is not valid {encoding}")]
    Encoding { encoding: &'static str },
    #[error("no root element found")]
    NoRootElement,
    #[error("junk after document element")]
    MultipleRootElements,
    #[error("text outside of the root element")]
    TextOutsideRoot,
    #[error("unexpected end of document, {open} element(s) not closed")]
    UnclosedElements { open: usize },
}

/// The parts of a `<path>` element the extractor reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathElement {
    /// `id` attribute, if present
    pub id: Option<String>,
    /// `d` attribute, empty when absent
    pub d: String,
}

impl PathElement {
    /// The element's id, or `fallback` when it has none.
    /// An empty `id=""` counts as missing.
    pub fn identifier<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => fallback,
        }
    }
}

/// Decode a raw SVG file into text
///
/// A byte order mark decides the encoding; otherwise the `encoding` of the
/// XML declaration does, and UTF-8 is assumed when neither is present.
/// Bytes that are invalid in the chosen encoding are an error.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, DocumentError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (declared_encoding(bytes)?, bytes),
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(DocumentError::Encoding {
            encoding: encoding.name(),
        });
    }

    Ok(text)
}

/// Encoding named by the XML declaration, UTF-8 if there is none
fn declared_encoding(bytes: &[u8]) -> Result<&'static Encoding, DocumentError> {
    // The declaration is ASCII in every ASCII-compatible encoding
    let mut reader = Reader::from_reader(bytes);
    let label = match reader.read_event() {
        Ok(Event::Decl(decl)) => match decl.encoding() {
            Some(Ok(label)) => label.into_owned(),
            _ => return Ok(UTF_8),
        },
        _ => return Ok(UTF_8),
    };

    // A declaration readable as ASCII rules out UTF-16, which maps to UTF-8 here
    Encoding::for_label(&label)
        .map(Encoding::output_encoding)
        .ok_or_else(|| DocumentError::UnknownEncoding {
            label: String::from_utf8_lossy(&label).into_owned(),
        })
}

/// Decode raw SVG bytes and return their path elements in document order
pub fn parse_svg(bytes: &[u8]) -> Result<Vec<PathElement>, DocumentError> {
    parse_paths(&decode_document(bytes)?)
}

/// Parse an SVG document and return its path elements in document order
///
/// Only descendants of the root are considered, and only when their name
/// resolves to the SVG namespace (`<path>` under a default `xmlns`, or a
/// prefixed `<svg:path>`). The document must be well-formed: a single root
/// element, every element closed, no stray text outside the root.
pub fn parse_paths(svg: &str) -> Result<Vec<PathElement>, DocumentError> {
    let svg = svg.strip_prefix('\u{feff}').unwrap_or(svg);
    let mut reader = NsReader::from_str(svg);

    let mut paths = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        let in_svg_namespace =
            matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == SVG_NAMESPACE);

        match event {
            Event::Start(e) => {
                if depth == 0 && seen_root {
                    return Err(DocumentError::MultipleRootElements);
                }
                if depth > 0 && in_svg_namespace && is_path(&e) {
                    paths.push(read_path(&e)?);
                }
                seen_root = true;
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 && seen_root {
                    return Err(DocumentError::MultipleRootElements);
                }
                if depth > 0 && in_svg_namespace && is_path(&e) {
                    paths.push(read_path(&e)?);
                }
                seen_root = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(text) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(DocumentError::TextOutsideRoot);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(DocumentError::NoRootElement);
    }
    if depth > 0 {
        return Err(DocumentError::UnclosedElements { open: depth });
    }

    Ok(paths)
}

fn is_path(element: &BytesStart<'_>) -> bool {
    element.local_name().as_ref() == b"path"
}

fn read_path(element: &BytesStart<'_>) -> Result<PathElement, DocumentError> {
    let mut path = PathElement::default();

    for attr in element.attributes() {
        let attr = attr?;
        // Only unprefixed attributes count; `inkscape:label` and friends are skipped
        match attr.key.as_ref() {
            b"id" => path.id = Some(attribute_value(&attr, "id")?),
            b"d" => path.d = attribute_value(&attr, "d")?,
            _ => {}
        }
    }

    Ok(path)
}

fn attribute_value(attr: &Attribute<'_>, name: &str) -> Result<String, DocumentError> {
    let raw = std::str::from_utf8(&attr.value).map_err(|_| DocumentError::AttributeEncoding {
        name: name.to_string(),
    })?;
    let value = unescape(raw).map_err(|source| DocumentError::Escape {
        name: name.to_string(),
        source,
    })?;
    Ok(value.into_owned())
}
