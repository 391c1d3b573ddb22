use thiserror::Error;

use super::types::IssueForm;
use super::validate::{validate_form, ValidationReport};

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("template failed validation: {0}")]
    Invalid(ValidationReport),

    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Template file '{0}' has no usable file name")]
    InvalidFileName(String),
}

/// Parse one issue-form YAML document and validate it exhaustively.
///
/// A document that parses but violates any schema rule is rejected with the
/// full [`ValidationReport`], so authors see every problem at once.
pub fn parse_form(source: &str) -> Result<IssueForm, FormError> {
    let form: IssueForm = serde_yaml::from_str(source)?;
    let report = validate_form(&form);
    if report.is_empty() {
        Ok(form)
    } else {
        Err(FormError::Invalid(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate::ValidationIssue;

    #[test]
    fn test_parse_form_valid() {
        let yaml = r"
name: Bug Report
description: File a bug
body:
  - type: textarea
    id: what-happened
    attributes:
      label: What happened?
    validations:
      required: true
";

        let form = parse_form(yaml).expect("Should parse");
        assert_eq!(form.name, "Bug Report");
        assert_eq!(form.body.len(), 1);
    }

    #[test]
    fn test_parse_form_malformed_yaml() {
        let result = parse_form("name: [unclosed");
        assert!(matches!(result, Err(FormError::YamlError(_))));
    }

    #[test]
    fn test_parse_form_reports_all_violations() {
        let yaml = r"
name: Broken
description: Duplicate ids and an empty dropdown
body:
  - type: input
    id: description
    attributes:
      label: First
  - type: input
    id: description
    attributes:
      label: Second
  - type: dropdown
    id: priority
    attributes:
      label: Priority
      options: []
";

        match parse_form(yaml) {
            Err(FormError::Invalid(report)) => {
                assert!(report.contains(&ValidationIssue::DuplicateFieldId {
                    id: "description".to_string()
                }));
                assert!(report.contains(&ValidationIssue::MissingOptions {
                    field: "priority".to_string(),
                    kind: "dropdown",
                }));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_form_required_on_markdown_rejected() {
        let yaml = r"
name: Broken
description: Markdown cannot be required
body:
  - type: markdown
    attributes:
      value: Welcome!
    validations:
      required: true
  - type: input
    id: contact
    attributes:
      label: Contact
";

        assert!(matches!(parse_form(yaml), Err(FormError::Invalid(_))));
    }
}
