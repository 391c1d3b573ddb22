mod crud;

pub use crud::{list_chat_modes, load_chat_mode, ChatModeError, CHATMODE_SUFFIX};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Front-matter recognized on a chat-mode file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatModeFrontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named persona selectable by a user to bias an assistant's behavior for
/// a session. The external tool's menu shows `description` next to `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatModeFile {
    /// Name derived from the file stem (e.g. `architect` for
    /// `architect.chatmode.md`)
    pub name: String,
    pub path: PathBuf,
    pub description: String,
    /// Opaque persona text after the front-matter
    pub body: String,
}
