// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![allow(unknown_lints, renamed_and_removed_lints, max_lines_per_file)]
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod bundle;
pub mod chatmode;
pub mod common;
pub mod form;
pub mod install;
pub mod instruction;
pub mod logging;
pub mod manifest;
pub mod prompt;
pub mod utils;

// Re-export commonly used types
pub use bundle::{
    load_bundle, Bundle, BundleError, BundleLoad, ChooserFile, Diagnostic, CHATMODES_DIR,
    INSTRUCTIONS_DIR, ISSUE_TEMPLATE_DIR, PROMPTS_DIR,
};
pub use chatmode::{list_chat_modes, load_chat_mode, ChatModeError, ChatModeFile};
pub use common::frontmatter::{parse_front_matter, FrontmatterError};
pub use form::{
    is_form_file, list_forms, load_form, parse_chooser_config, parse_form, render_submission,
    validate_form, CheckboxOption, ChooserError, ContactLink, FieldValidations, FormError,
    FormField, FormFile, IssueForm, RenderError, Submission, SubmissionValue,
    TemplateChooserConfig, ValidationIssue, ValidationReport,
};
pub use install::{
    check_install, install_bundle, CheckError, FileCheck, InstallError, InstallResult,
    InstallState, InstallStatus,
};
pub use instruction::{
    list_instructions, load_instruction, parse_apply_to, validate_glob, GlobListError,
    InstructionError, InstructionFile,
};
pub use logging::{init_logging, parse_rotation, LogConfig};
pub use manifest::{
    create_manifest, read_manifest, update_manifest_timestamp, write_manifest, ManifestError,
    PackManifest,
};
pub use prompt::{list_prompts, load_prompt, PromptError, PromptFile};
