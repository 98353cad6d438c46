//! Read contracts for the DMN model types
//!
//! Two traits cover the two document families:
//!
//! - [`JsonResource`]: metadata records, readable from a reader, a URL or a file
//! - [`XmlResource`]: the decision-table document, readable from a reader or a string
//!
//! Every operation comes in two forms. The `from_*` constructors return a
//! fresh value; the `read*` methods replace the receiver's content. The
//! receiver is only replaced after a successful decode.
//!
//! # Examples
//!
//! ```no_run
//! use dmn_core::{Definition, DefinitionList};
//! use dmn_reader::{JsonResource, XmlResource};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut list = DefinitionList::new();
//! list.read_file("definitions.json")?;
//!
//! let definition = Definition::from_xml_str(r#"<definitions id="def1"/>"#)?;
//! assert_eq!(definition.id, "def1");
//! # Ok(())
//! # }
//! ```

use dmn_core::{Definition, DefinitionInfo, DefinitionList, DmnXml};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

use crate::error::ReaderResult;
use crate::xml::FromXmlElement;
use crate::{decode, file_system, http};

/// A metadata type decoded from JSON
pub trait JsonResource: DeserializeOwned + Sized {
    /// Decode from a JSON byte stream
    fn from_reader<R: Read>(reader: R) -> ReaderResult<Self> {
        decode::read_json(reader)
    }

    /// Fetch `url` with an unauthenticated GET and decode the body
    fn from_url(url: &str) -> ReaderResult<Self> {
        http::read_json_from_url(url)
    }

    /// Open `path` and decode its content
    fn from_file<P: AsRef<Path>>(path: P) -> ReaderResult<Self> {
        file_system::read_json_from_file(path)
    }

    /// Replace the content of `self` with the JSON read from `reader`
    fn read<R: Read>(&mut self, reader: R) -> ReaderResult<()> {
        *self = Self::from_reader(reader)?;
        Ok(())
    }

    /// Replace the content of `self` with the JSON served at `url`
    fn read_url(&mut self, url: &str) -> ReaderResult<()> {
        *self = Self::from_url(url)?;
        Ok(())
    }

    /// Replace the content of `self` with the JSON stored at `path`
    fn read_file<P: AsRef<Path>>(&mut self, path: P) -> ReaderResult<()> {
        *self = Self::from_file(path)?;
        Ok(())
    }
}

impl JsonResource for DefinitionList {}
impl JsonResource for DefinitionInfo {}
impl JsonResource for DmnXml {}

/// A document type decoded from XML
///
/// Documents have no URL or file form: their text normally arrives inside
/// a [`DmnXml`] record fetched beforehand.
pub trait XmlResource: FromXmlElement {
    /// Decode from an XML byte stream
    fn from_reader<R: Read>(reader: R) -> ReaderResult<Self> {
        decode::read_xml(reader)
    }

    /// Decode from XML text
    fn from_xml_str(text: &str) -> ReaderResult<Self> {
        decode::read_xml_str(text)
    }

    /// Replace the content of `self` with the XML read from `reader`
    fn read<R: Read>(&mut self, reader: R) -> ReaderResult<()> {
        *self = Self::from_reader(reader)?;
        Ok(())
    }

    /// Replace the content of `self` with the XML in `text`
    fn read_string(&mut self, text: &str) -> ReaderResult<()> {
        *self = Self::from_xml_str(text)?;
        Ok(())
    }
}

impl XmlResource for Definition {}

/// Parse the document carried by a [`DmnXml`] record
pub trait DmnXmlExt {
    fn definition(&self) -> ReaderResult<Definition>;
}

impl DmnXmlExt for DmnXml {
    fn definition(&self) -> ReaderResult<Definition> {
        Definition::from_xml_str(&self.dmn_xml)
    }
}
