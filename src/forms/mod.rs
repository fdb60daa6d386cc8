//! Form validation and sanitization.
//!
//! Each entity declares one [`FormSpec`]: an ordered table of fields with
//! their label, input kind, message and rule pipeline. The same table drives
//! validation here and form rendering in `views::forms`.

pub mod escape;
pub mod rules;

use std::collections::HashMap;

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

pub use escape::{escape, Escaped};
pub use rules::{parse_iso_date, Rule, Step};

/// How a field is presented in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    /// Single choice from a lookup list
    Select,
    /// Any number of choices from a lookup list
    Checkboxes,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    /// Reported when a rule rejects the value without a message of its own
    pub message: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    pub fn is_multiple(&self) -> bool {
        self.kind == FieldKind::Checkboxes
    }

    /// Run the rule pipeline over one raw value. Every rule runs even after a
    /// rejection so the value kept for re-display is sanitized too; only the
    /// first rejection is reported.
    fn run(&self, raw: &str) -> (Escaped, Option<&'static str>) {
        let mut value = raw.to_string();
        let mut violation = None;
        let mut escaped = false;

        for rule in self.rules {
            match rule.apply(value) {
                Step::Continue(next) => value = next,
                Step::Finish(next) => {
                    value = next;
                    break;
                }
                Step::Reject(next, message) => {
                    value = next;
                    violation.get_or_insert(message.unwrap_or(self.message));
                }
            }
            if *rule == Rule::Escape {
                escaped = true;
            }
        }

        let value = if escaped {
            Escaped::from_escaped(value)
        } else {
            Escaped::from_raw(&value)
        };
        (value, violation)
    }
}

#[derive(Debug)]
pub struct FormSpec {
    pub fields: &'static [FieldSpec],
}

impl FormSpec {
    /// Validate and sanitize every declared field, in declaration order.
    /// Fields not declared in the table are ignored.
    pub fn validate(&self, input: &FormInput) -> Submission {
        let mut submission = Submission::default();

        for field in self.fields {
            let raws = if field.is_multiple() {
                input.get_all(field.name)
            } else {
                vec![input.get(field.name).unwrap_or_default()]
            };

            let mut values = Vec::with_capacity(raws.len());
            let mut violation = None;
            for raw in raws {
                let (value, rejected) = field.run(raw);
                if field.is_multiple() && value.is_empty() {
                    continue;
                }
                values.push(value);
                violation = violation.or(rejected);
            }

            submission.values.set_all(field.name, values);
            if let Some(message) = violation {
                submission.violations.push(Violation {
                    field: field.name,
                    message,
                });
            }
        }

        submission
    }
}

/// Raw urlencoded form body. Keys may repeat (checkbox groups).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormInput(Vec<(String, String)>);

impl FormInput {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Sanitized values keyed by field name, used to pre-fill forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(HashMap<&'static str, Vec<Escaped>>);

impl FormValues {
    pub fn set(&mut self, name: &'static str, value: Escaped) {
        self.0.insert(name, vec![value]);
    }

    pub fn set_all(&mut self, name: &'static str, values: Vec<Escaped>) {
        self.0.insert(name, values);
    }

    pub fn get(&self, name: &str) -> Option<&Escaped> {
        self.0.get(name).and_then(|values| values.first())
    }

    pub fn get_all(&self, name: &str) -> &[Escaped] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get_all(name).iter().any(|v| v.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of running a [`FormSpec`] over a request body
#[derive(Debug, Clone, Default)]
pub struct Submission {
    values: FormValues,
    violations: Vec<Violation>,
}

impl Submission {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Record a violation found after validation, such as a conflict with
    /// stored data
    pub fn reject(&mut self, field: &'static str, message: &'static str) {
        self.violations.push(Violation { field, message });
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn text(&self, name: &str) -> Escaped {
        self.values.get(name).cloned().unwrap_or_default()
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.values.get(name).and_then(|v| parse_iso_date(v.as_str()))
    }

    pub fn object_id(&self, name: &str) -> Option<ObjectId> {
        self.values
            .get(name)
            .and_then(|v| ObjectId::parse_str(v.as_str()).ok())
    }

    pub fn object_ids(&self, name: &str) -> Vec<ObjectId> {
        self.values
            .get_all(name)
            .iter()
            .filter_map(|v| ObjectId::parse_str(v.as_str()).ok())
            .collect()
    }
}
