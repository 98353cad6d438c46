//! Root of the DMN document tree

use super::table::DecisionTable;
use serde::{Deserialize, Serialize};

/// A `<definitions>` element: the root of a DMN 1.1 document
///
/// Only a single `<decision>` child is modelled. When a document holds
/// several, decoding keeps the first one in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Definition {
    pub xmlns: String,

    pub id: String,

    pub name: String,

    /// Global expression language, accepted as attribute or child element
    pub expression_language: String,

    pub namespace: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
}

impl Definition {
    /// The decision table of the (single) decision, if any
    pub fn decision_table(&self) -> Option<&DecisionTable> {
        self.decision.as_ref()?.decision_table.as_ref()
    }

    /// Expression language declared on the root, `None` when not declared
    pub fn declared_expression_language(&self) -> Option<&str> {
        if self.expression_language.is_empty() {
            None
        } else {
            Some(&self.expression_language)
        }
    }
}

/// A `<decision>` element
///
/// `name` describes the decision the table provides logic for; `id` is its
/// technical identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Decision {
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_table: Option<DecisionTable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table_accessor() {
        let mut def = Definition::default();
        assert!(def.decision_table().is_none());

        def.decision = Some(Decision {
            id: "dec1".to_string(),
            ..Default::default()
        });
        assert!(def.decision_table().is_none());

        def.decision.as_mut().unwrap().decision_table = Some(DecisionTable {
            id: "dt1".to_string(),
            ..Default::default()
        });
        assert_eq!(def.decision_table().unwrap().id, "dt1");
    }

    #[test]
    fn test_declared_expression_language() {
        let mut def = Definition::default();
        assert_eq!(def.declared_expression_language(), None);

        def.expression_language = "juel".to_string();
        assert_eq!(def.declared_expression_language(), Some("juel"));
    }

    #[test]
    fn test_json_field_names() {
        let def = Definition {
            id: "def1".to_string(),
            expression_language: "juel".to_string(),
            decision: Some(Decision {
                id: "dec1".to_string(),
                decision_table: Some(DecisionTable {
                    hit_policy: "FIRST".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["expressionLanguage"], "juel");
        assert_eq!(value["decision"]["decisionTable"]["hitPolicy"], "FIRST");

        let back: Definition = serde_json::from_value(value).unwrap();
        assert_eq!(back, def);
    }
}
