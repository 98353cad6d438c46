//! DMN Core - Data model for Decision Model and Notation documents
//!
//! This crate provides the passive types shared across the workspace:
//! - Deployment metadata records (`DefinitionInfo`, `DefinitionList`, `DmnXml`)
//! - The DMN 1.1 decision-table document tree (`Definition` and below)
//! - Optional structural validation of decision tables
//!
//! Nothing here evaluates a decision. Expressions and hit policies are
//! carried as plain strings. Reading the types from JSON or XML lives in
//! the `dmn-reader` crate.

pub mod error;
pub mod model;
pub mod validator;

mod serde_ext;

// Re-export commonly used types
pub use error::ValidationError;
pub use model::{
    Decision, DecisionTable, Definition, DefinitionInfo, DefinitionList, DmnXml, Input,
    InputEntry, InputExpression, Output, OutputEntry, Rule,
};
pub use validator::Validator;
