use serde::{Deserialize, Serialize};

/// A declarative issue-form template.
///
/// One YAML document describes one form: display metadata, the labels,
/// projects and assignees attached to the created issue, and the ordered
/// sequence of fields the external platform renders. Fields render and
/// serialize in the sequence declared in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueForm {
    /// Display name shown in the template chooser
    #[serde(default)]
    pub name: String,
    /// Short description shown next to the name
    #[serde(default)]
    pub description: String,
    /// Default issue title; may contain literal prefix text like "[Bug]: "
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Labels attached to the created issue. Declared order is kept, but
    /// duplicates carry no meaning; see [`IssueForm::unique_labels`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Project references attached to the created issue
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
    /// User handles assigned to the created issue
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    /// Ordered sequence of form fields
    #[serde(default)]
    pub body: Vec<FormField>,
}

impl IssueForm {
    /// Labels with duplicates removed, preserving first occurrence.
    #[must_use]
    pub fn unique_labels(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.labels
            .iter()
            .map(String::as_str)
            .filter(|label| seen.insert(*label))
            .collect()
    }

    /// Fields that accept user input (everything except `markdown` blocks).
    #[must_use]
    pub fn user_input_fields(&self) -> impl Iterator<Item = &FormField> {
        self.body.iter().filter(|field| field.is_user_input())
    }
}

/// One field of an issue form, tagged by its `type`.
///
/// The five kinds carry type-specific attributes; unknown kinds are rejected
/// at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormField {
    /// Literal display-only Markdown; never user input
    Markdown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        attributes: MarkdownAttributes,
        /// Never legal here; kept in the model so the validator can reject it
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validations: Option<FieldValidations>,
    },
    /// Single-line text input
    Input {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        attributes: InputAttributes,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validations: Option<FieldValidations>,
    },
    /// Multi-line text input
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        attributes: TextareaAttributes,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validations: Option<FieldValidations>,
    },
    /// Selection from a fixed option list
    Dropdown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        attributes: DropdownAttributes,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validations: Option<FieldValidations>,
    },
    /// Task-list of checkable options
    Checkboxes {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        attributes: CheckboxesAttributes,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validations: Option<FieldValidations>,
    },
}

impl FormField {
    /// The declared `id`, used as the key when a submission is serialized.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            FormField::Markdown { id, .. }
            | FormField::Input { id, .. }
            | FormField::Textarea { id, .. }
            | FormField::Dropdown { id, .. }
            | FormField::Checkboxes { id, .. } => id.as_deref(),
        }
    }

    /// The user-facing label; `None` for `markdown` blocks.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            FormField::Markdown { .. } => None,
            FormField::Input { attributes, .. } => Some(attributes.label.as_str()),
            FormField::Textarea { attributes, .. } => Some(attributes.label.as_str()),
            FormField::Dropdown { attributes, .. } => Some(attributes.label.as_str()),
            FormField::Checkboxes { attributes, .. } => Some(attributes.label.as_str()),
        }
    }

    /// The schema name of this field's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FormField::Markdown { .. } => "markdown",
            FormField::Input { .. } => "input",
            FormField::Textarea { .. } => "textarea",
            FormField::Dropdown { .. } => "dropdown",
            FormField::Checkboxes { .. } => "checkboxes",
        }
    }

    /// The declared validations block, if any.
    #[must_use]
    pub fn validations(&self) -> Option<&FieldValidations> {
        match self {
            FormField::Markdown { validations, .. }
            | FormField::Input { validations, .. }
            | FormField::Textarea { validations, .. }
            | FormField::Dropdown { validations, .. }
            | FormField::Checkboxes { validations, .. } => validations.as_ref(),
        }
    }

    /// Whether this field blocks submission until populated.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.validations().is_some_and(|v| v.required)
    }

    /// Whether this field accepts user input (everything except `markdown`).
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        !matches!(self, FormField::Markdown { .. })
    }
}

/// Attributes of a `markdown` field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownAttributes {
    /// The literal Markdown rendered between fields
    pub value: String,
}

/// Attributes of an `input` field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Pre-filled value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Attributes of a `textarea` field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextareaAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Language hint; the platform fences the submitted text as a code block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

/// Attributes of a `dropdown` field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropdownAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether multiple options may be selected
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub options: Vec<String>,
    /// Index of the pre-selected option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<usize>,
}

/// Attributes of a `checkboxes` field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckboxesAttributes {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<CheckboxOption>,
}

/// One checkable option inside a `checkboxes` field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckboxOption {
    pub label: String,
    /// Blocks submission until checked
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

/// Validation rules attached to a user-input field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldValidations {
    /// Blocks submission until the field is populated
    #[serde(default)]
    pub required: bool,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
