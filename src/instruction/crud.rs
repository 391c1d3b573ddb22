use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::globs::{parse_apply_to, GlobListError};
use super::types::{InstructionFile, InstructionFrontmatter};
use crate::common::frontmatter::{parse_front_matter, FrontmatterError};

/// File-name suffix the editor recognizes for instruction files
pub const INSTRUCTION_SUFFIX: &str = ".instructions.md";

#[derive(Error, Debug)]
pub enum InstructionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Front-matter error: {0}")]
    FrontmatterError(#[from] FrontmatterError),

    #[error("Invalid applyTo value: {0}")]
    ApplyToError(#[from] GlobListError),

    #[error("Instruction file '{0}' not found")]
    NotFound(String),

    #[error("'{0}' is not an instruction file (expected the {INSTRUCTION_SUFFIX} suffix)")]
    WrongSuffix(String),
}

/// Derive the instruction name from its file name
fn instruction_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(INSTRUCTION_SUFFIX))
        .map(ToString::to_string)
}

/// Load a single instruction file.
///
/// Front-matter is required (the editor silently ignores files without it, so
/// a missing block is an authoring mistake worth surfacing). An `applyTo`
/// value, if present, must be a syntactically valid comma-separated glob
/// list.
pub async fn load_instruction(path: &Path) -> Result<InstructionFile, InstructionError> {
    if !path.exists() {
        return Err(InstructionError::NotFound(path.display().to_string()));
    }
    let name = instruction_name(path)
        .ok_or_else(|| InstructionError::WrongSuffix(path.display().to_string()))?;

    let content = fs::read_to_string(path).await?;
    let (frontmatter, body): (InstructionFrontmatter, String) = parse_front_matter(&content)?;

    let apply_to = frontmatter
        .apply_to
        .as_deref()
        .map(parse_apply_to)
        .transpose()?
        .unwrap_or_default();

    debug!(instruction = %name, patterns = apply_to.len(), "loaded instruction file");

    Ok(InstructionFile {
        name,
        path: path.to_path_buf(),
        description: frontmatter.description,
        apply_to,
        body,
    })
}

/// Collect instruction file paths under a directory, recursively.
///
/// Editors accept instruction files nested in subfolders, so the whole tree
/// is walked. Paths come back sorted for deterministic ordering.
fn collect_instruction_paths(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| instruction_name(path).is_some())
        .collect();
    paths.sort();
    paths
}

/// List all instruction files under a directory.
///
/// A missing directory yields an empty list. Files that fail to load are
/// skipped here; [`crate::bundle::load_bundle`] reports them.
pub async fn list_instructions(dir: &Path) -> Result<Vec<InstructionFile>, InstructionError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut instructions = Vec::new();
    for path in collect_instruction_paths(dir) {
        match load_instruction(&path).await {
            Ok(instruction) => instructions.push(instruction),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping invalid instruction file");
            }
        }
    }

    Ok(instructions)
}
