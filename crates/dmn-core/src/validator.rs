//! Structural validation of decoded decision tables
//!
//! Decoding never validates. Callers that want to know whether a table
//! is well formed run a [`Validator`] over it afterwards.

use crate::error::{Result, ValidationError};
use crate::model::{DecisionTable, Definition};
use std::collections::HashSet;

/// Validator for decision tables
pub struct Validator {
    /// Whether to check rule entry counts against clause counts
    check_entry_counts: bool,
    /// Whether to check output name uniqueness
    check_output_names: bool,
}

impl Validator {
    /// Create a validator with every check enabled
    pub fn new() -> Self {
        Self {
            check_entry_counts: true,
            check_output_names: true,
        }
    }

    /// Enable or disable the rule entry count check
    pub fn check_entry_counts(mut self, enabled: bool) -> Self {
        self.check_entry_counts = enabled;
        self
    }

    /// Enable or disable the output name uniqueness check
    pub fn check_output_names(mut self, enabled: bool) -> Self {
        self.check_output_names = enabled;
        self
    }

    /// Validate the decision table of a definition
    pub fn validate_definition(&self, definition: &Definition) -> Result<()> {
        match definition.decision_table() {
            Some(table) => self.validate_table(table),
            None => Err(vec![ValidationError::MissingDecisionTable {
                definition_id: definition.id.clone(),
            }]),
        }
    }

    /// Validate a decision table, collecting every problem found
    pub fn validate_table(&self, table: &DecisionTable) -> Result<()> {
        let mut errors = Vec::new();

        if self.check_entry_counts {
            for rule in &table.rules {
                if rule.input_entries.len() != table.inputs.len() {
                    errors.push(ValidationError::InputEntryCount {
                        rule_id: rule.id.clone(),
                        expected: table.inputs.len(),
                        actual: rule.input_entries.len(),
                    });
                }
                if rule.output_entries.len() != table.outputs.len() {
                    errors.push(ValidationError::OutputEntryCount {
                        rule_id: rule.id.clone(),
                        expected: table.outputs.len(),
                        actual: rule.output_entries.len(),
                    });
                }
            }
        }

        // A single output may be unnamed
        if self.check_output_names && table.outputs.len() > 1 {
            let mut seen = HashSet::new();
            for output in &table.outputs {
                if !seen.insert(output.name.as_str()) {
                    errors.push(ValidationError::DuplicateOutputName {
                        table_id: table.id.clone(),
                        name: output.name.clone(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Definition {
    /// Validate with every check enabled
    pub fn validate(&self) -> Result<()> {
        Validator::new().validate_definition(self)
    }
}

impl DecisionTable {
    /// Validate with every check enabled
    pub fn validate(&self) -> Result<()> {
        Validator::new().validate_table(self)
    }
}
