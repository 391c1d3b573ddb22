use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use super::{PromptFile, PromptFrontmatter};
use crate::common::frontmatter::{has_front_matter, parse_front_matter, FrontmatterError};

/// File-name suffix the editor recognizes for prompt files
pub const PROMPT_SUFFIX: &str = ".prompt.md";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Front-matter error: {0}")]
    FrontmatterError(#[from] FrontmatterError),

    #[error("Prompt '{0}' not found")]
    NotFound(String),

    #[error("'{0}' is not a prompt file (expected the {PROMPT_SUFFIX} suffix)")]
    WrongSuffix(String),
}

fn prompt_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(PROMPT_SUFFIX))
        .map(ToString::to_string)
}

/// Load a single prompt file.
///
/// Front-matter is optional for prompts: a bare Markdown file is a valid
/// prompt whose whole content is the body.
pub async fn load_prompt(path: &Path) -> Result<PromptFile, PromptError> {
    if !path.exists() {
        return Err(PromptError::NotFound(path.display().to_string()));
    }
    let name =
        prompt_name(path).ok_or_else(|| PromptError::WrongSuffix(path.display().to_string()))?;

    let content = fs::read_to_string(path).await?;
    let (description, body) = if has_front_matter(&content) {
        let (frontmatter, body): (PromptFrontmatter, String) = parse_front_matter(&content)?;
        (frontmatter.description, body)
    } else {
        (None, content.trim_end().to_string())
    };

    debug!(prompt = %name, "loaded prompt file");

    Ok(PromptFile {
        name,
        path: path.to_path_buf(),
        description,
        body,
    })
}

/// List all prompts in a directory, ordered by name.
///
/// A missing directory yields an empty list. Files that fail to load are
/// skipped here; [`crate::bundle::load_bundle`] reports them.
pub async fn list_prompts(dir: &Path) -> Result<Vec<PromptFile>, PromptError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut prompts = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        let path = entry.path();
        if prompt_name(&path).is_none() {
            continue;
        }

        match load_prompt(&path).await {
            Ok(prompt) => prompts.push(prompt),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping invalid prompt file");
            }
        }
    }

    prompts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(prompts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_prompt_with_front_matter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("review.prompt.md");
        fs::write(
            &path,
            "---\ndescription: Review the current changes\n---\n\nReview this diff carefully.",
        )
        .await
        .unwrap();

        let prompt = load_prompt(&path).await.unwrap();
        assert_eq!(prompt.name, "review");
        assert_eq!(
            prompt.description.as_deref(),
            Some("Review the current changes")
        );
        assert_eq!(prompt.body, "Review this diff carefully.");
    }

    #[tokio::test]
    async fn test_load_prompt_without_front_matter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("explain.prompt.md");
        fs::write(&path, "Explain the selected code.\n").await.unwrap();

        let prompt = load_prompt(&path).await.unwrap();
        assert_eq!(prompt.description, None);
        assert_eq!(prompt.body, "Explain the selected code.");
    }

    #[tokio::test]
    async fn test_load_prompt_broken_front_matter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.prompt.md");
        fs::write(&path, "---\ndescription: [unclosed\n---\n\nBody.")
            .await
            .unwrap();

        let result = load_prompt(&path).await;
        assert!(matches!(result, Err(PromptError::FrontmatterError(_))));
    }

    #[tokio::test]
    async fn test_list_prompts_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.prompt.md"), "B body.")
            .await
            .unwrap();
        fs::write(dir.path().join("a.prompt.md"), "A body.")
            .await
            .unwrap();
        fs::write(dir.path().join("notes.md"), "not a prompt")
            .await
            .unwrap();

        let prompts = list_prompts(dir.path()).await.unwrap();
        let names: Vec<&str> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_prompts_missing_dir_is_empty() {
        let prompts = list_prompts(Path::new("/nonexistent/prompts")).await.unwrap();
        assert!(prompts.is_empty());
    }
}
