use std::collections::HashMap;
use thiserror::Error;

use super::types::{CheckboxesAttributes, DropdownAttributes, FormField, IssueForm};

/// Placeholder body for an optional field the user left blank
const NO_RESPONSE: &str = "_No response_";

/// The value a user supplied for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionValue {
    /// Free text for `input` and `textarea` fields
    Text(String),
    /// Selected option labels of a `dropdown` field
    Selection(Vec<String>),
    /// Checked option labels of a `checkboxes` field
    Checks(Vec<String>),
}

/// A filled form: field `id` mapped to the user-supplied value
#[derive(Debug, Clone, Default)]
pub struct Submission {
    values: HashMap<String, SubmissionValue>,
}

impl Submission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, id: &str, value: &str) {
        self.values
            .insert(id.to_string(), SubmissionValue::Text(value.to_string()));
    }

    pub fn set_selection(&mut self, id: &str, selected: Vec<String>) {
        self.values
            .insert(id.to_string(), SubmissionValue::Selection(selected));
    }

    pub fn set_checks(&mut self, id: &str, checked: Vec<String>) {
        self.values
            .insert(id.to_string(), SubmissionValue::Checks(checked));
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SubmissionValue> {
        self.values.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("required field '{id}' is missing a value")]
    MissingRequired { id: String },

    #[error("required option '{option}' of field '{id}' is not checked")]
    RequiredOptionUnchecked { id: String, option: String },

    #[error("field '{id}' does not declare option '{option}'")]
    UnknownOption { id: String, option: String },

    #[error("field '{id}' accepts a single selection")]
    MultipleSelections { id: String },

    #[error("field '{id}' expects a {expected} value")]
    WrongValueKind { id: String, expected: &'static str },
}

/// Key used in render errors: the field id, else its label, else its kind
fn error_key(field: &FormField) -> String {
    field.id().map_or_else(
        || field.label().unwrap_or_else(|| field.kind()).to_string(),
        ToString::to_string,
    )
}

/// Serialize a submission into a single issue body.
///
/// Sections appear in declared field order, each under a `###` heading derived
/// from the field's label. `markdown` fields contribute nothing. Required
/// fields block serialization until populated.
pub fn render_submission(
    form: &IssueForm,
    submission: &Submission,
) -> Result<String, RenderError> {
    let mut sections: Vec<String> = Vec::new();

    for field in &form.body {
        match field {
            FormField::Markdown { .. } => {}
            FormField::Input { id, attributes, .. } => {
                let body = text_body(field, id.as_deref(), None, submission)?;
                sections.push(section(&attributes.label, &body));
            }
            FormField::Textarea { id, attributes, .. } => {
                let render = attributes.render.as_deref();
                let body = text_body(field, id.as_deref(), render, submission)?;
                sections.push(section(&attributes.label, &body));
            }
            FormField::Dropdown { id, attributes, .. } => {
                let body = dropdown_body(field, id.as_deref(), attributes, submission)?;
                sections.push(section(&attributes.label, &body));
            }
            FormField::Checkboxes { id, attributes, .. } => {
                let body = checkboxes_body(field, id.as_deref(), attributes, submission)?;
                sections.push(section(&attributes.label, &body));
            }
        }
    }

    if sections.is_empty() {
        return Ok(String::new());
    }
    let mut body = sections.join("\n\n");
    body.push('\n');
    Ok(body)
}

fn section(label: &str, body: &str) -> String {
    format!("### {label}\n\n{body}")
}

/// Body of an `input` or `textarea` section. A `render` language hint wraps
/// the submitted text in a fenced code block.
fn text_body(
    field: &FormField,
    id: Option<&str>,
    render: Option<&str>,
    submission: &Submission,
) -> Result<String, RenderError> {
    let value = id.and_then(|key| submission.get(key));
    let text = match value {
        None => None,
        Some(SubmissionValue::Text(text)) => Some(text.clone()),
        Some(SubmissionValue::Selection(_) | SubmissionValue::Checks(_)) => {
            return Err(RenderError::WrongValueKind {
                id: error_key(field),
                expected: "text",
            });
        }
    };

    let trimmed = text.as_deref().map_or("", str::trim);
    if trimmed.is_empty() {
        if field.is_required() {
            return Err(RenderError::MissingRequired {
                id: error_key(field),
            });
        }
        return Ok(NO_RESPONSE.to_string());
    }

    Ok(render.map_or_else(
        || trimmed.to_string(),
        |language| format!("```{language}\n{trimmed}\n```"),
    ))
}

/// Body of a `dropdown` section: the selected options joined with `, `
fn dropdown_body(
    field: &FormField,
    id: Option<&str>,
    attributes: &DropdownAttributes,
    submission: &Submission,
) -> Result<String, RenderError> {
    let value = id.and_then(|key| submission.get(key));
    let selected: Vec<String> = match value {
        None => Vec::new(),
        Some(SubmissionValue::Selection(selected)) => selected.clone(),
        Some(SubmissionValue::Text(_) | SubmissionValue::Checks(_)) => {
            return Err(RenderError::WrongValueKind {
                id: error_key(field),
                expected: "selection",
            });
        }
    };

    for choice in &selected {
        if !attributes.options.contains(choice) {
            return Err(RenderError::UnknownOption {
                id: error_key(field),
                option: choice.clone(),
            });
        }
    }

    if !attributes.multiple && selected.len() > 1 {
        return Err(RenderError::MultipleSelections {
            id: error_key(field),
        });
    }

    if selected.is_empty() {
        if field.is_required() {
            return Err(RenderError::MissingRequired {
                id: error_key(field),
            });
        }
        return Ok(NO_RESPONSE.to_string());
    }

    Ok(selected.join(", "))
}

/// Body of a `checkboxes` section: one task-list line per declared option
fn checkboxes_body(
    field: &FormField,
    id: Option<&str>,
    attributes: &CheckboxesAttributes,
    submission: &Submission,
) -> Result<String, RenderError> {
    let value = id.and_then(|key| submission.get(key));
    let checked: Vec<String> = match value {
        None => Vec::new(),
        Some(SubmissionValue::Checks(checked)) => checked.clone(),
        Some(SubmissionValue::Text(_) | SubmissionValue::Selection(_)) => {
            return Err(RenderError::WrongValueKind {
                id: error_key(field),
                expected: "checks",
            });
        }
    };

    for choice in &checked {
        if !attributes.options.iter().any(|option| option.label == *choice) {
            return Err(RenderError::UnknownOption {
                id: error_key(field),
                option: choice.clone(),
            });
        }
    }

    for option in &attributes.options {
        if option.required && !checked.contains(&option.label) {
            return Err(RenderError::RequiredOptionUnchecked {
                id: error_key(field),
                option: option.label.clone(),
            });
        }
    }

    if field.is_required() && checked.is_empty() {
        return Err(RenderError::MissingRequired {
            id: error_key(field),
        });
    }

    let lines: Vec<String> = attributes
        .options
        .iter()
        .map(|option| {
            let mark = if checked.contains(&option.label) {
                "x"
            } else {
                " "
            };
            format!("- [{mark}] {}", option.label)
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
