use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use super::{ChatModeFile, ChatModeFrontmatter};
use crate::common::frontmatter::{parse_front_matter, FrontmatterError};

/// File-name suffix the editor recognizes for chat-mode files
pub const CHATMODE_SUFFIX: &str = ".chatmode.md";

#[derive(Error, Debug)]
pub enum ChatModeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Front-matter error: {0}")]
    FrontmatterError(#[from] FrontmatterError),

    #[error("Chat mode '{0}' not found")]
    NotFound(String),

    #[error("'{0}' is not a chat-mode file (expected the {CHATMODE_SUFFIX} suffix)")]
    WrongSuffix(String),

    #[error("Chat mode '{0}' is missing a description")]
    MissingDescription(String),
}

fn chat_mode_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(CHATMODE_SUFFIX))
        .map(ToString::to_string)
}

/// Load a single chat-mode file.
///
/// A chat mode without a non-empty `description` is rejected: the selection
/// menu has nothing to show for it.
pub async fn load_chat_mode(path: &Path) -> Result<ChatModeFile, ChatModeError> {
    if !path.exists() {
        return Err(ChatModeError::NotFound(path.display().to_string()));
    }
    let name =
        chat_mode_name(path).ok_or_else(|| ChatModeError::WrongSuffix(path.display().to_string()))?;

    let content = fs::read_to_string(path).await?;
    let (frontmatter, body): (ChatModeFrontmatter, String) = parse_front_matter(&content)?;

    let description = frontmatter
        .description
        .filter(|description| !description.trim().is_empty())
        .ok_or_else(|| ChatModeError::MissingDescription(name.clone()))?;

    debug!(chat_mode = %name, "loaded chat mode");

    Ok(ChatModeFile {
        name,
        path: path.to_path_buf(),
        description,
        body,
    })
}

/// List all chat modes in a directory, ordered by name.
///
/// A missing directory yields an empty list. Files that fail to load are
/// skipped here; [`crate::bundle::load_bundle`] reports them.
pub async fn list_chat_modes(dir: &Path) -> Result<Vec<ChatModeFile>, ChatModeError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut chat_modes = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        let path = entry.path();
        if chat_mode_name(&path).is_none() {
            continue;
        }

        match load_chat_mode(&path).await {
            Ok(chat_mode) => chat_modes.push(chat_mode),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping invalid chat mode");
            }
        }
    }

    chat_modes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(chat_modes)
}
