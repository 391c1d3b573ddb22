//! The directory convention consuming projects expect.
//!
//! These names are dictated by the external consumers (the editor and the
//! hosting platform), not by this crate.

use std::path::{Path, PathBuf};

/// Directory holding instruction files
pub const INSTRUCTIONS_DIR: &str = "instructions";

/// Directory holding chat-mode files
pub const CHATMODES_DIR: &str = "chatmodes";

/// Directory holding prompt files
pub const PROMPTS_DIR: &str = "prompts";

/// Directory holding issue-form templates and the chooser config
pub const ISSUE_TEMPLATE_DIR: &str = "ISSUE_TEMPLATE";

/// Path of the instructions directory inside a bundle root
#[must_use]
pub fn instructions_path(bundle_root: &Path) -> PathBuf {
    bundle_root.join(INSTRUCTIONS_DIR)
}

/// Path of the chat-modes directory inside a bundle root
#[must_use]
pub fn chatmodes_path(bundle_root: &Path) -> PathBuf {
    bundle_root.join(CHATMODES_DIR)
}

/// Path of the prompts directory inside a bundle root
#[must_use]
pub fn prompts_path(bundle_root: &Path) -> PathBuf {
    bundle_root.join(PROMPTS_DIR)
}

/// Path of the issue-template directory inside a bundle root
#[must_use]
pub fn issue_template_path(bundle_root: &Path) -> PathBuf {
    bundle_root.join(ISSUE_TEMPLATE_DIR)
}

/// All four group directories of a bundle root
#[must_use]
pub fn group_dirs(bundle_root: &Path) -> [PathBuf; 4] {
    [
        instructions_path(bundle_root),
        chatmodes_path(bundle_root),
        prompts_path(bundle_root),
        issue_template_path(bundle_root),
    ]
}
