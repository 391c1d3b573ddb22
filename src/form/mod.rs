mod chooser;
mod crud;
mod parse;
mod render;
mod types;
mod validate;

pub use chooser::{parse_chooser_config, ChooserError, ContactLink, TemplateChooserConfig};
pub use crud::{is_form_file, list_forms, load_form, FormFile, CHOOSER_CONFIG_FILE};
pub use parse::{parse_form, FormError};
pub use render::{render_submission, RenderError, Submission, SubmissionValue};
pub use types::{
    CheckboxOption, CheckboxesAttributes, DropdownAttributes, FieldValidations, FormField,
    InputAttributes, IssueForm, MarkdownAttributes, TextareaAttributes,
};
pub use validate::{validate_form, ValidationIssue, ValidationReport};
