//! DMN data model
//!
//! Two independent families of types:
//! - Metadata records describing deployed decisions (JSON)
//! - The decision-table document tree (DMN 1.1 XML)
//!
//! See <https://docs.camunda.org/manual/7.4/reference/dmn11/decision-table/>
//! for the XML elements the document tree mirrors.

pub mod definition;
pub mod metadata;
pub mod table;

pub use definition::{Decision, Definition};
pub use metadata::{DefinitionInfo, DefinitionList, DmnXml};
pub use table::{DecisionTable, Input, InputEntry, InputExpression, Output, OutputEntry, Rule};
