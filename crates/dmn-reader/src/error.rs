//! Error types for the reader layer

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for reader operations
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors that can occur while reading DMN metadata or documents
///
/// After any error the value being read must be considered unusable.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Malformed or structurally incompatible JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed XML
    #[error("Failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed input that holds no document element
    #[error("Failed to parse XML: {0}")]
    XmlStructure(String),

    /// The request could not be completed before a response body was obtained
    #[error("HTTP request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid source configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration file is not valid YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification of a [`ReaderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Network,
    File,
    Config,
}

impl ReaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReaderError::Json(_) | ReaderError::Xml(_) | ReaderError::XmlStructure(_) => {
                ErrorKind::Decode
            }
            ReaderError::Network { .. } => ErrorKind::Network,
            ReaderError::File { .. } => ErrorKind::File,
            ReaderError::Config(_) | ReaderError::Yaml(_) => ErrorKind::Config,
        }
    }

    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }
}
