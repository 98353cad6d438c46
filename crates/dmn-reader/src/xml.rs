//! Event-driven XML decoding
//!
//! Documents are decoded straight from quick-xml's event stream rather than
//! through a serde layer: expression text inside `<text>` elements must come
//! out byte for byte, leading and trailing whitespace and line breaks
//! included, and the element-to-field mapping needs to stay lenient (unknown
//! elements skipped, a repeated single-valued child tolerated).
//!
//! [`XmlEvents`] walks the tree; each model type implements
//! [`FromXmlElement`] to pick the attributes and children it knows.

use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

use crate::error::{ReaderError, ReaderResult};

/// A type decoded from one XML element and its subtree
pub trait FromXmlElement: Sized {
    /// Build a value from `start`, consuming events up to its end tag
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self>;
}

/// Pull-based cursor over the events of one XML document
///
/// Empty elements (`<output/>`) are reported as a start tag followed by an
/// end tag, so every element is consumed the same way. End tags are checked
/// against their start tags.
pub struct XmlEvents<B: BufRead> {
    reader: Reader<B>,
    buf: Vec<u8>,
}

impl<B: BufRead> XmlEvents<B> {
    pub fn new(source: B) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    fn next_event(&mut self) -> ReaderResult<Event<'static>> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf)?.into_owned();
        Ok(event)
    }

    /// Decode the document element as `T`
    ///
    /// The prolog (declaration, comments, processing instructions, doctype)
    /// is skipped. Anything after the document element is not read.
    pub fn read_root<T: FromXmlElement>(&mut self) -> ReaderResult<T> {
        loop {
            match self.next_event()? {
                Event::Start(start) => return T::from_element(&start, self),
                Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {}
                Event::Text(_) | Event::CData(_) => {
                    return Err(ReaderError::XmlStructure(
                        "text before the root element".to_string(),
                    ))
                }
                Event::Eof => {
                    return Err(ReaderError::XmlStructure("no root element".to_string()))
                }
                _ => {}
            }
        }
    }

    /// Hand every child element of `parent` to `visit`, in document order
    ///
    /// `visit` must consume the child it is given (through
    /// [`FromXmlElement::from_element`], [`XmlEvents::text`] or
    /// [`XmlEvents::skip`]). Returns once the end tag of `parent` is read.
    /// Text between children is ignored.
    pub fn children<F>(&mut self, parent: &BytesStart<'_>, mut visit: F) -> ReaderResult<()>
    where
        F: FnMut(&mut Self, &BytesStart<'_>) -> ReaderResult<()>,
    {
        loop {
            match self.next_event()? {
                Event::Start(child) => visit(self, &child)?,
                Event::End(_) => return Ok(()),
                Event::Eof => return Err(missing_end_tag(parent)),
                _ => {}
            }
        }
    }

    /// The text content of `element`, exactly as written
    ///
    /// Character references and entities are resolved and CDATA sections
    /// are taken as is. No whitespace is trimmed or normalized. Nested
    /// elements are skipped.
    pub fn text(&mut self, element: &BytesStart<'_>) -> ReaderResult<String> {
        let mut content = String::new();
        loop {
            match self.next_event()? {
                Event::Text(text) => content.push_str(&text.unescape()?),
                Event::CData(data) => {
                    content.push_str(&data.decode().map_err(quick_xml::Error::from)?)
                }
                Event::Start(nested) => self.skip(&nested)?,
                Event::End(_) => return Ok(content),
                Event::Eof => return Err(missing_end_tag(element)),
                _ => {}
            }
        }
    }

    /// Consume `element` and its whole subtree
    pub fn skip(&mut self, element: &BytesStart<'_>) -> ReaderResult<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(missing_end_tag(element)),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Unescaped attributes of `start`, keyed by qualified name, in document order
pub fn attributes(start: &BytesStart<'_>) -> ReaderResult<Vec<(Vec<u8>, String)>> {
    let mut pairs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let value = attr.unescape_value()?.into_owned();
        pairs.push((attr.key.as_ref().to_vec(), value));
    }
    Ok(pairs)
}

fn missing_end_tag(element: &BytesStart<'_>) -> ReaderError {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(name)).into()
}
