//! Decode helpers shared by every model type
//!
//! Each helper performs its I/O exactly once. There is no caching and no
//! retry; the first decoder error is returned as is.

use serde::de::DeserializeOwned;
use std::io::{BufReader, Read};
use tracing::debug;

use crate::error::ReaderResult;
use crate::xml::{FromXmlElement, XmlEvents};

/// Decode a JSON value from a reader
///
/// The whole stream must hold a single JSON value; trailing whitespace is
/// allowed, anything else is an error.
pub fn read_json<T, R>(reader: R) -> ReaderResult<T>
where
    T: DeserializeOwned,
    R: Read,
{
    debug!(target_type = std::any::type_name::<T>(), "Decoding JSON");
    let value = serde_json::from_reader(BufReader::new(reader))?;
    Ok(value)
}

/// Decode an XML document from a reader
///
/// The document element is decoded as `T`; element text is kept verbatim.
pub fn read_xml<T, R>(reader: R) -> ReaderResult<T>
where
    T: FromXmlElement,
    R: Read,
{
    debug!(target_type = std::any::type_name::<T>(), "Decoding XML");
    XmlEvents::new(BufReader::new(reader)).read_root()
}

/// Decode an XML document held in a string
///
/// Equivalent to calling [`read_xml`] on the string's bytes.
pub fn read_xml_str<T>(text: &str) -> ReaderResult<T>
where
    T: FromXmlElement,
{
    read_xml(text.as_bytes())
}
