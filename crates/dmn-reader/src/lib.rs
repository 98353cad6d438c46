//! Readers for DMN deployment metadata and decision-table documents
//!
//! This crate populates the `dmn-core` model from serialized input:
//!
//! - **Metadata** (`DefinitionList`, `DefinitionInfo`, `DmnXml`): JSON, read from
//!   any `std::io::Read`, an HTTP(S) URL or a local file
//! - **Documents** (`Definition`): DMN 1.1 XML, read from any `std::io::Read`
//!   or a string
//!
//! All operations are synchronous and perform their I/O exactly once: no
//! caching, no retries. Unknown JSON fields and unknown XML attributes or
//! elements are ignored. Repeated XML children keep document order, and
//! element text (expressions, descriptions) is kept exactly as written.
//!
//! # Quick Start
//!
//! ```no_run
//! use dmn_core::DefinitionList;
//! use dmn_reader::{DmnXmlExt, EngineEndpoint, JsonResource};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Metadata from a file
//!     let list = DefinitionList::from_file("definitions.json")?;
//!     println!("{} definitions", list.len());
//!
//!     // Metadata and document from a running engine
//!     let engine = EngineEndpoint::new("http://localhost:8080/engine-rest");
//!     let xml = engine.dmn_xml("dish:1:c3a63aaa")?;
//!     let definition = xml.definition()?;
//!
//!     if let Some(table) = definition.decision_table() {
//!         println!("{} rules, hit policy {}", table.rules.len(), table.hit_policy);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is a [`ReaderError`]; [`ReaderError::kind`] classifies it
//! as a decode, network, file or configuration problem. HTTP status codes
//! are not interpreted: a 404 with an empty body is a decode error.

pub mod config;
pub mod decode;
mod document;
pub mod engine;
pub mod error;
pub mod file_system;
pub mod http;
pub mod traits;
pub mod xml;

// Re-exports - Configuration
pub use config::{ConfigError, EngineConfig, SourceConfig, SourceKind};

// Re-exports - Error
pub use error::{ErrorKind, ReaderError, ReaderResult};

// Re-exports - Readers
pub use decode::{read_json, read_xml, read_xml_str};
pub use engine::EngineEndpoint;
pub use file_system::read_json_from_file;
pub use http::read_json_from_url;
pub use traits::{DmnXmlExt, JsonResource, XmlResource};
pub use xml::{FromXmlElement, XmlEvents};
