// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Record redactor — rebuilds a record with every leaf replaced according to
// the schema, keeping keys and list lengths.
//
// There is no error path. Missing, null, or wrongly typed values are treated
// as empty and come out in their empty form.

use lockview_core::Placeholders;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::schema::{FieldSpec, RESUME_SCHEMA, Rule, TextValue, lookup};

/// Produces locked copies of records.
#[derive(Debug, Clone)]
pub struct RecordRedactor {
    placeholders: Placeholders,
    schema: &'static [FieldSpec],
}

impl Default for RecordRedactor {
    fn default() -> Self {
        Self::new(Placeholders::default())
    }
}

impl RecordRedactor {
    /// A redactor for resume records using the given replacement text.
    pub fn new(placeholders: Placeholders) -> Self {
        Self {
            placeholders,
            schema: RESUME_SCHEMA,
        }
    }

    /// Use a different top-level schema.
    pub fn with_schema(mut self, schema: &'static [FieldSpec]) -> Self {
        self.schema = schema;
        self
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Build the locked copy of `record`.
    ///
    /// Keys present in the input are kept at every level. Top-level schema
    /// fields missing from the input are added in their empty form, so the
    /// output always carries every section.
    #[instrument(skip_all)]
    pub fn redact(&self, record: &Value) -> Value {
        let empty = Map::new();
        let source = match record.as_object() {
            Some(map) => map,
            None => {
                debug!("record is not an object; treating it as empty");
                &empty
            }
        };

        let mut locked = self.redact_fields(source, self.schema);
        for spec in self.schema {
            locked
                .entry(spec.name)
                .or_insert_with(|| spec.role.rule().empty_form());
        }
        debug!(fields = locked.len(), "Record locked");
        Value::Object(locked)
    }

    /// Parse JSON text and redact it. Unparseable text yields the fully empty
    /// locked record.
    pub fn redact_json(&self, text: &str) -> Value {
        let record = serde_json::from_str(text).unwrap_or_else(|err| {
            debug!(error = %err, "record is not valid JSON; treating it as empty");
            Value::Null
        });
        self.redact(&record)
    }

    fn redact_fields(&self, source: &Map<String, Value>, fields: &[FieldSpec]) -> Map<String, Value> {
        source
            .iter()
            .map(|(key, value)| {
                let locked = match lookup(fields, key) {
                    Some(spec) => self.apply(spec.role.rule(), value),
                    None => self.redact_unknown(value),
                };
                (key.clone(), locked)
            })
            .collect()
    }

    fn apply(&self, rule: Rule, value: &Value) -> Value {
        match rule {
            Rule::Text(text) => self.text(text, value),
            Rule::Clear => Value::String(String::new()),
            Rule::Null => Value::Null,
            Rule::Flag => Value::Bool(false),
            Rule::EachScalar => match value {
                Value::Array(items) => Value::Array(
                    items
                        .iter()
                        .map(|item| self.text(TextValue::Token, item))
                        .collect(),
                ),
                _ => Value::Array(Vec::new()),
            },
            Rule::EachRecord(fields) => match value {
                Value::Array(items) => Value::Array(
                    items
                        .iter()
                        .map(|item| match item.as_object() {
                            Some(entry) => Value::Object(self.redact_fields(entry, fields)),
                            None => Value::Object(Map::new()),
                        })
                        .collect(),
                ),
                _ => Value::Array(Vec::new()),
            },
            Rule::Section(fields) => match value.as_object() {
                Some(section) => Value::Object(self.redact_fields(section, fields)),
                None => Value::Object(Map::new()),
            },
        }
    }

    /// Placeholder for present text, empty string otherwise.
    fn text(&self, text: TextValue, value: &Value) -> Value {
        if is_present(value) {
            Value::String(text.resolve(&self.placeholders).to_string())
        } else {
            Value::String(String::new())
        }
    }

    /// Fields outside the schema: keep the structure, blank the scalars.
    fn redact_unknown(&self, value: &Value) -> Value {
        match value {
            Value::Null => Value::Null,
            Value::Bool(_) => Value::Bool(false),
            Value::Number(_) => Value::from(0),
            Value::String(s) if s.is_empty() => Value::String(String::new()),
            Value::String(_) => Value::String(self.placeholders.token.clone()),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.redact_unknown(item)).collect())
            }
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), self.redact_unknown(item)))
                    .collect(),
            ),
        }
    }
}

/// Non-empty text, or a number or boolean sitting where text was expected.
fn is_present(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// One-shot form of [`RecordRedactor::redact`] with the stock placeholders.
pub fn redact(record: &Value) -> Value {
    RecordRedactor::default().redact(record)
}

// -- Tests --------------------------------------------------------------------
