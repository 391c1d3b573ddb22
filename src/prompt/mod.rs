mod crud;

pub use crud::{list_prompts, load_prompt, PromptError, PROMPT_SUFFIX};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Front-matter recognized on a prompt file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptFrontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A reusable prompt template invoked on demand to seed an assistant
/// interaction with a fixed task description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFile {
    /// Name derived from the file stem (e.g. `review` for `review.prompt.md`)
    pub name: String,
    pub path: PathBuf,
    pub description: Option<String>,
    /// Opaque task text; the whole file when no front-matter is present
    pub body: String,
}
