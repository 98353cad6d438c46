//! Decision table definitions
//!
//! A decision table consists of input clauses, output clauses and rules.
//! Each rule pairs one input entry per input clause with one output entry
//! per output clause, matched by position. The types keep that order
//! exactly as it appears in the document and never check it; see
//! [`crate::Validator`] for an explicit check.

use serde::{Deserialize, Serialize};

/// A `<decisionTable>` element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecisionTable {
    pub id: String,

    /// Hit policy tag (e.g. "UNIQUE", "FIRST", "COLLECT"), uninterpreted
    pub hit_policy: String,

    pub inputs: Vec<Input>,

    pub outputs: Vec<Output>,

    pub rules: Vec<Rule>,
}

impl DecisionTable {
    /// Find an output clause by name
    pub fn output_by_name(&self, name: &str) -> Option<&Output> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Find a rule by id
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

/// An input clause
///
/// The id references the input in the engine's decision history. The label
/// is a short human-readable description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Input {
    pub id: String,

    pub label: String,

    pub input_expressions: Vec<InputExpression>,
}

impl Input {
    /// The first input expression; DMN tables carry exactly one in practice
    pub fn expression(&self) -> Option<&InputExpression> {
        self.input_expressions.first()
    }
}

/// How the value of an input clause is produced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputExpression {
    pub id: String,

    /// Declared type the evaluated value converts to
    pub type_ref: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_language: Option<String>,

    pub text: String,
}

impl InputExpression {
    /// Expression language override, or `default` when absent
    pub fn effective_expression_language<'a>(&'a self, default: &'a str) -> &'a str {
        self.expression_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(default)
    }
}

/// An output clause
///
/// `name` references the output value in the decision result. When a
/// table has more than one output, names must be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Output {
    pub id: String,

    pub label: String,

    pub name: String,

    pub type_ref: String,
}

/// A rule: a row of the table
///
/// Input entries are the conditions, output entries the conclusion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rule {
    pub id: String,

    pub input_entries: Vec<InputEntry>,

    pub output_entries: Vec<OutputEntry>,
}

/// A condition cell of a rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputEntry {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_language: Option<String>,

    pub text: String,
}

impl InputEntry {
    /// An empty entry is always satisfied
    pub fn is_wildcard(&self) -> bool {
        self.text.is_empty()
    }

    /// Expression language override, or `default` when absent
    pub fn effective_expression_language<'a>(&'a self, default: &'a str) -> &'a str {
        self.expression_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(default)
    }
}

/// A conclusion cell of a rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputEntry {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_language: Option<String>,

    /// Free-text annotation of the entry
    pub description: String,

    pub text: String,
}

impl OutputEntry {
    /// An empty entry is left out of the decision result
    pub fn is_ignored(&self) -> bool {
        self.text.is_empty()
    }

    /// Expression language override, or `default` when absent
    pub fn effective_expression_language<'a>(&'a self, default: &'a str) -> &'a str {
        self.expression_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_entry_wildcard() {
        let entry = InputEntry::default();
        assert!(entry.is_wildcard());

        let entry = InputEntry {
            text: "> 18".to_string(),
            ..Default::default()
        };
        assert!(!entry.is_wildcard());
    }

    #[test]
    fn test_output_entry_ignored() {
        assert!(OutputEntry::default().is_ignored());
    }

    #[test]
    fn test_effective_expression_language() {
        let mut expr = InputExpression::default();
        assert_eq!(expr.effective_expression_language("juel"), "juel");

        expr.expression_language = Some("feel".to_string());
        assert_eq!(expr.effective_expression_language("juel"), "feel");
    }

    #[test]
    fn test_empty_expression_language_falls_back() {
        let entry = OutputEntry {
            expression_language: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(entry.effective_expression_language("juel"), "juel");
    }

    #[test]
    fn test_output_by_name() {
        let table = DecisionTable {
            outputs: vec![
                Output {
                    id: "o1".to_string(),
                    name: "result".to_string(),
                    ..Default::default()
                },
                Output {
                    id: "o2".to_string(),
                    name: "reason".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        assert_eq!(table.output_by_name("reason").unwrap().id, "o2");
        assert!(table.output_by_name("missing").is_none());
    }
}
