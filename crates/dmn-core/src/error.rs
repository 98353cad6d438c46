//! Error types for DMN Core

use thiserror::Error;

/// Structural problem found by [`crate::Validator`]
///
/// Decoding never produces these. They only come out of an explicit
/// validation pass over an already decoded document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A rule carries a different number of input entries than the table has inputs
    #[error("Rule '{rule_id}' has {actual} input entries, expected {expected}")]
    InputEntryCount {
        rule_id: String,
        expected: usize,
        actual: usize,
    },

    /// A rule carries a different number of output entries than the table has outputs
    #[error("Rule '{rule_id}' has {actual} output entries, expected {expected}")]
    OutputEntryCount {
        rule_id: String,
        expected: usize,
        actual: usize,
    },

    /// Two outputs of a multi-output table share a name
    #[error("Duplicate output name '{name}' in decision table '{table_id}'")]
    DuplicateOutputName { table_id: String, name: String },

    /// The definition has no decision table to validate
    #[error("Definition '{definition_id}' has no decision table")]
    MissingDecisionTable { definition_id: String },
}

pub type Result<T> = std::result::Result<T, Vec<ValidationError>>;
