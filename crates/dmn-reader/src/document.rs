//! XML mapping of the DMN document tree
//!
//! Element and attribute names follow DMN 1.1 and are case-sensitive.
//! Elements are matched by local name, so a namespace prefix
//! (`<dmn:decision>`) is accepted; attributes are matched by their full
//! name. Anything not listed here is skipped.
//!
//! | element           | attributes                              | children                              |
//! |-------------------|-----------------------------------------|---------------------------------------|
//! | `definitions`     | xmlns, id, name, expressionLanguage, namespace | decision, expressionLanguage, namespace |
//! | `decision`        | id, name                                | decisionTable                         |
//! | `decisionTable`   | id, hitPolicy                           | input, output, rule                   |
//! | `input`           | id, label                               | inputExpression                       |
//! | `inputExpression` | id, typeRef, expressionLanguage         | text                                  |
//! | `output`          | id, label, name, typeRef                |                                       |
//! | `rule`            | id                                      | inputEntry, outputEntry               |
//! | `inputEntry`      | id, expressionLanguage                  | text                                  |
//! | `outputEntry`     | id, expressionLanguage                  | description, text                     |
//!
//! Only the first `decision` of a definition and the first `decisionTable`
//! of a decision are kept; later ones are skipped.

use dmn_core::{
    Decision, DecisionTable, Definition, Input, InputEntry, InputExpression, Output,
    OutputEntry, Rule,
};
use quick_xml::events::BytesStart;
use std::io::BufRead;

use crate::error::ReaderResult;
use crate::xml::{attributes, FromXmlElement, XmlEvents};

/// An `expressionLanguage=""` attribute declares nothing
fn language_override(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FromXmlElement for Definition {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut definition = Definition::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"xmlns" => definition.xmlns = value,
                b"id" => definition.id = value,
                b"name" => definition.name = value,
                b"expressionLanguage" => definition.expression_language = value,
                b"namespace" => definition.namespace = value,
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"decision" if definition.decision.is_some() => events.skip(child)?,
                b"decision" => {
                    definition.decision = Some(Decision::from_element(child, events)?);
                }
                // Older exports carry these as child elements
                b"expressionLanguage" => definition.expression_language = events.text(child)?,
                b"namespace" => definition.namespace = events.text(child)?,
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(definition)
    }
}

impl FromXmlElement for Decision {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut decision = Decision::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => decision.id = value,
                b"name" => decision.name = value,
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"decisionTable" if decision.decision_table.is_none() => {
                    decision.decision_table = Some(DecisionTable::from_element(child, events)?);
                }
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(decision)
    }
}

impl FromXmlElement for DecisionTable {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut table = DecisionTable::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => table.id = value,
                b"hitPolicy" => table.hit_policy = value,
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"input" => table.inputs.push(Input::from_element(child, events)?),
                b"output" => table.outputs.push(Output::from_element(child, events)?),
                b"rule" => table.rules.push(Rule::from_element(child, events)?),
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(table)
    }
}

impl FromXmlElement for Input {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut input = Input::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => input.id = value,
                b"label" => input.label = value,
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"inputExpression" => input
                    .input_expressions
                    .push(InputExpression::from_element(child, events)?),
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(input)
    }
}

impl FromXmlElement for InputExpression {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut expression = InputExpression::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => expression.id = value,
                b"typeRef" => expression.type_ref = value,
                b"expressionLanguage" => {
                    expression.expression_language = language_override(value)
                }
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"text" => expression.text = events.text(child)?,
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(expression)
    }
}

impl FromXmlElement for Output {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut output = Output::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => output.id = value,
                b"label" => output.label = value,
                b"name" => output.name = value,
                b"typeRef" => output.type_ref = value,
                _ => {}
            }
        }

        events.skip(start)?;
        Ok(output)
    }
}

impl FromXmlElement for Rule {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut rule = Rule::default();
        for (key, value) in attributes(start)? {
            if key == b"id" {
                rule.id = value;
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"inputEntry" => rule.input_entries.push(InputEntry::from_element(child, events)?),
                b"outputEntry" => rule
                    .output_entries
                    .push(OutputEntry::from_element(child, events)?),
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(rule)
    }
}

impl FromXmlElement for InputEntry {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut entry = InputEntry::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => entry.id = value,
                b"expressionLanguage" => entry.expression_language = language_override(value),
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"text" => entry.text = events.text(child)?,
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(entry)
    }
}

impl FromXmlElement for OutputEntry {
    fn from_element<B: BufRead>(
        start: &BytesStart<'_>,
        events: &mut XmlEvents<B>,
    ) -> ReaderResult<Self> {
        let mut entry = OutputEntry::default();
        for (key, value) in attributes(start)? {
            match key.as_slice() {
                b"id" => entry.id = value,
                b"expressionLanguage" => entry.expression_language = language_override(value),
                _ => {}
            }
        }

        events.children(start, |events, child| {
            match child.local_name().as_ref() {
                b"description" => entry.description = events.text(child)?,
                b"text" => entry.text = events.text(child)?,
                _ => events.skip(child)?,
            }
            Ok(())
        })?;

        Ok(entry)
    }
}
