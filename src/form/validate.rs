use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

use super::types::{FormField, IssueForm};

/// Static regex for validating field ids (compiled once on first use)
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static FIELD_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Za-z0-9_-]+$").expect("FIELD_ID_PATTERN is a valid regex literal")
});

/// One rule violation found in an issue-form document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("duplicate field id '{id}'")]
    DuplicateFieldId { id: String },

    #[error("field id '{id}' contains characters outside [A-Za-z0-9_-]")]
    InvalidFieldId { id: String },

    #[error("template name must not be empty")]
    EmptyName,

    #[error("template description must not be empty")]
    EmptyDescription,

    #[error("template title must not be empty when present")]
    EmptyTitle,

    #[error("{kind} field '{field}' is missing a label")]
    MissingLabel { field: String, kind: &'static str },

    #[error("{kind} field '{field}' must declare at least one option")]
    MissingOptions { field: String, kind: &'static str },

    #[error("dropdown field '{field}' declares duplicate option '{option}'")]
    DuplicateOption { field: String, option: String },

    #[error("dropdown field '{field}' default index {index} is out of range for {count} option(s)")]
    DefaultOutOfRange {
        field: String,
        index: usize,
        count: usize,
    },

    #[error("markdown field '{field}' must not declare validations")]
    MarkdownWithValidations { field: String },

    #[error("markdown field '{field}' must not have an empty value")]
    EmptyMarkdownValue { field: String },

    #[error("template body must declare at least one field")]
    EmptyBody,

    #[error("template must contain at least one user-input field")]
    NoUserInput,
}

/// All violations found in one document.
///
/// Validation is exhaustive: every violation is reported, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    #[must_use]
    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl From<Vec<ValidationIssue>> for ValidationReport {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// Display name for a field in diagnostics: its id, else its label, else its
/// one-based position.
fn field_display_name(field: &FormField, position: usize) -> String {
    field.id().map_or_else(
        || {
            field
                .label()
                .filter(|label| !label.is_empty())
                .map_or_else(|| format!("#{position}"), ToString::to_string)
        },
        ToString::to_string,
    )
}

/// Validate an issue-form document against every schema rule at once.
///
/// Returns an empty report when the form is valid.
#[must_use]
pub fn validate_form(form: &IssueForm) -> ValidationReport {
    let mut issues = Vec::new();

    if form.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyName);
    }
    if form.description.trim().is_empty() {
        issues.push(ValidationIssue::EmptyDescription);
    }
    if form
        .title
        .as_ref()
        .is_some_and(|title| title.trim().is_empty())
    {
        issues.push(ValidationIssue::EmptyTitle);
    }

    if form.body.is_empty() {
        issues.push(ValidationIssue::EmptyBody);
    }
    if !form.body.is_empty() && form.user_input_fields().next().is_none() {
        issues.push(ValidationIssue::NoUserInput);
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (index, field) in form.body.iter().enumerate() {
        let position = index.saturating_add(1);
        let name = field_display_name(field, position);

        if let Some(id) = field.id() {
            if !FIELD_ID_PATTERN.is_match(id) {
                issues.push(ValidationIssue::InvalidFieldId { id: id.to_string() });
            }
            if !seen_ids.insert(id) {
                issues.push(ValidationIssue::DuplicateFieldId { id: id.to_string() });
            }
        }

        if field.is_user_input() && field.label().is_none_or(|label| label.trim().is_empty()) {
            issues.push(ValidationIssue::MissingLabel {
                field: name.clone(),
                kind: field.kind(),
            });
        }

        validate_field_body(field, &name, &mut issues);
    }

    issues.into()
}

/// Kind-specific checks for a single field.
fn validate_field_body(field: &FormField, name: &str, issues: &mut Vec<ValidationIssue>) {
    match field {
        FormField::Markdown {
            attributes,
            validations,
            ..
        } => {
            // Markdown blocks are display-only; a validations block (required
            // or not) is an authoring mistake the platform rejects
            if validations.is_some() {
                issues.push(ValidationIssue::MarkdownWithValidations {
                    field: name.to_string(),
                });
            }
            if attributes.value.trim().is_empty() {
                issues.push(ValidationIssue::EmptyMarkdownValue {
                    field: name.to_string(),
                });
            }
        }
        FormField::Input { .. } | FormField::Textarea { .. } => {}
        FormField::Dropdown { attributes, .. } => {
            if attributes.options.is_empty() {
                issues.push(ValidationIssue::MissingOptions {
                    field: name.to_string(),
                    kind: "dropdown",
                });
            }

            let mut seen_options: HashSet<&str> = HashSet::new();
            for option in &attributes.options {
                if !seen_options.insert(option.as_str()) {
                    issues.push(ValidationIssue::DuplicateOption {
                        field: name.to_string(),
                        option: option.clone(),
                    });
                }
            }

            if let Some(default) = attributes.default {
                if default >= attributes.options.len() {
                    issues.push(ValidationIssue::DefaultOutOfRange {
                        field: name.to_string(),
                        index: default,
                        count: attributes.options.len(),
                    });
                }
            }
        }
        FormField::Checkboxes { attributes, .. } => {
            if attributes.options.is_empty() {
                issues.push(ValidationIssue::MissingOptions {
                    field: name.to_string(),
                    kind: "checkboxes",
                });
            }
        }
    }
}
