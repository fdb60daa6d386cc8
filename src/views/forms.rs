//! Forms rendered from an entity's [`FormSpec`]

use std::collections::HashMap;

use maud::{html, Markup};

use crate::forms::{Escaped, FieldKind, FieldSpec, FormSpec, FormValues, Violation};

/// One option of a select or checkbox group
#[derive(Debug, Clone)]
pub struct Choice {
    pub value: String,
    pub label: Escaped,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: Escaped) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

/// Lookup lists keyed by field name
pub type Choices = HashMap<&'static str, Vec<Choice>>;

/// Everything needed to render one form page
pub struct FormView<'a> {
    pub title: &'a str,
    pub spec: &'a FormSpec,
    pub values: &'a FormValues,
    pub choices: &'a Choices,
    pub violations: &'a [Violation],
}

pub fn render(view: &FormView<'_>) -> Markup {
    html! {
        h1 { (view.title) }
        form method="POST" action="" {
            @for field in view.spec.fields {
                div.form-group {
                    (input(field, view.values, view.choices.get(field.name).map(Vec::as_slice).unwrap_or_default()))
                }
            }
            button.btn.btn-primary type="submit" { "Submit" }
        }
        @if !view.violations.is_empty() {
            ul.errors {
                @for violation in view.violations {
                    li { (violation.message) }
                }
            }
        }
    }
}

fn input(field: &FieldSpec, values: &FormValues, choices: &[Choice]) -> Markup {
    let value = values.get(field.name);
    html! {
        label for=(field.name) { (field.label) ":" }
        @match field.kind {
            FieldKind::Text => {
                input.form-control type="text" id=(field.name) name=(field.name)
                    placeholder=(field.placeholder) required[field.is_required()] value=[value];
            }
            FieldKind::Date => {
                input.form-control type="date" id=(field.name) name=(field.name) value=[value];
            }
            FieldKind::TextArea => {
                textarea.form-control id=(field.name) name=(field.name)
                    placeholder=(field.placeholder) required[field.is_required()] {
                    @if let Some(value) = value { (value) }
                }
            }
            FieldKind::Select => {
                select.form-control id=(field.name) name=(field.name) required[field.is_required()] {
                    option value="" { "--" (field.placeholder) "--" }
                    @for choice in choices {
                        option value=(choice.value) selected[values.contains(field.name, &choice.value)] {
                            (choice.label)
                        }
                    }
                }
            }
            FieldKind::Checkboxes => {
                div {
                    @for choice in choices {
                        div.checkbox-input {
                            input.checkbox-input type="checkbox" name=(field.name) id=(choice.value)
                                value=(choice.value) checked[values.contains(field.name, &choice.value)];
                            label for=(choice.value) { (choice.label) }
                        }
                    }
                }
            }
        }
    }
}
