//! Source configuration types
//!
//! Describes where a metadata record should be read from (file, URL or
//! inline text) and where a decision engine's REST API lives. Both types
//! are plain serde structs, so they can be embedded in a caller's own
//! configuration or loaded from YAML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::engine::EngineEndpoint;
use crate::error::{ReaderError, ReaderResult};
use crate::traits::JsonResource;

/// Where a JSON metadata record comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Local file
    #[default]
    File,
    /// HTTP(S) endpoint
    Url,
    /// Content embedded in the configuration itself
    Inline,
}

/// Metadata source configuration
///
/// # Examples
///
/// ```rust
/// use dmn_reader::SourceConfig;
///
/// let config = SourceConfig::file("definitions.json");
/// assert!(config.validate().is_ok());
///
/// let config = SourceConfig::from_yaml_str("source: url\nurl: http://localhost:8080/engine-rest/decision-definition\n").unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source type
    pub source: SourceKind,

    /// File path (required for File source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Locator (required for Url source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// JSON text (required for Inline source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SourceConfig {
    /// Read from a local file
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            source: SourceKind::File,
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Read from an HTTP(S) endpoint
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            source: SourceKind::Url,
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Read from JSON text held in the configuration
    pub fn inline(content: impl Into<String>) -> Self {
        Self {
            source: SourceKind::Inline,
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> ReaderResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> ReaderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ReaderError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Validate the configuration
    ///
    /// Returns an error if the field required by the selected source is
    /// missing or empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (field, value) = match self.source {
            SourceKind::File => ("path", &self.path),
            SourceKind::Url => ("url", &self.url),
            SourceKind::Inline => ("content", &self.content),
        };

        match value {
            Some(v) if !v.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingField {
                kind: self.source,
                field: field.to_string(),
            }),
        }
    }

    /// Validate, then read a metadata record from the configured source
    pub fn load<T: JsonResource>(&self) -> ReaderResult<T> {
        self.validate()?;

        // validate() guarantees the selected field is present
        match self.source {
            SourceKind::File => T::from_file(self.path.as_deref().unwrap_or_default()),
            SourceKind::Url => T::from_url(self.url.as_deref().unwrap_or_default()),
            SourceKind::Inline => {
                T::from_reader(self.content.as_deref().unwrap_or_default().as_bytes())
            }
        }
    }
}

/// Decision engine REST API configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the REST API, e.g. `http://localhost:8080/engine-rest`
    pub base_url: String,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> ReaderResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                kind: SourceKind::Url,
                field: "base_url".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Validate, then build the endpoint helper
    pub fn endpoint(&self) -> Result<EngineEndpoint, ConfigError> {
        self.validate()?;
        Ok(EngineEndpoint::new(&self.base_url))
    }
}

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing for the selected source
    #[error("{kind:?} source requires {field} to be set")]
    MissingField { kind: SourceKind, field: String },

    /// Base URL is not an http(s) URL
    #[error("Not an http(s) URL: {0}")]
    InvalidUrl(String),
}
