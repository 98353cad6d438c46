//! Decision engine REST endpoint helper
//!
//! Builds the decision-definition URLs of a Camunda-style REST API and
//! reads the metadata served there.
//!
//! # API Specification
//!
//! ## GET {base}/decision-definition
//!
//! Returns a JSON array of decision definitions ([`DefinitionList`]).
//!
//! ## GET {base}/decision-definition/{id}
//! ## GET {base}/decision-definition/key/{key}
//!
//! Return a single definition ([`DefinitionInfo`]); by key the engine
//! answers with the latest version.
//!
//! ## GET {base}/decision-definition/{id}/xml
//!
//! Returns `{"id": ..., "dmnXml": ...}` ([`DmnXml`]).
//!
//! Requests are unauthenticated and never retried.

use dmn_core::{Definition, DefinitionInfo, DefinitionList, DmnXml};
use tracing::debug;

use crate::error::ReaderResult;
use crate::traits::{DmnXmlExt, JsonResource};

/// REST endpoint of a decision engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEndpoint {
    /// Base URL without trailing slash
    base_url: String,
}

impl EngineEndpoint {
    /// Create an endpoint helper for `base_url` (e.g. "http://localhost:8080/engine-rest")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn definitions_url(&self) -> String {
        format!("{}/decision-definition", self.base_url)
    }

    pub fn definition_url(&self, id: &str) -> String {
        format!(
            "{}/decision-definition/{}",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    pub fn definition_by_key_url(&self, key: &str) -> String {
        format!(
            "{}/decision-definition/key/{}",
            self.base_url,
            urlencoding::encode(key)
        )
    }

    pub fn dmn_xml_url(&self, id: &str) -> String {
        format!("{}/xml", self.definition_url(id))
    }

    /// List every deployed decision definition
    pub fn definitions(&self) -> ReaderResult<DefinitionList> {
        DefinitionList::from_url(&self.definitions_url())
    }

    /// Fetch one definition by id
    pub fn definition(&self, id: &str) -> ReaderResult<DefinitionInfo> {
        DefinitionInfo::from_url(&self.definition_url(id))
    }

    /// Fetch the latest definition deployed under `key`
    pub fn definition_by_key(&self, key: &str) -> ReaderResult<DefinitionInfo> {
        DefinitionInfo::from_url(&self.definition_by_key_url(key))
    }

    /// Fetch the raw DMN XML of a definition
    pub fn dmn_xml(&self, id: &str) -> ReaderResult<DmnXml> {
        DmnXml::from_url(&self.dmn_xml_url(id))
    }

    /// Fetch the DMN XML of a definition and parse it into a document tree
    pub fn document(&self, id: &str) -> ReaderResult<Definition> {
        let xml = self.dmn_xml(id)?;
        debug!(id = %xml.id, bytes = xml.dmn_xml.len(), "Parsing fetched DMN document");
        xml.definition()
    }
}
