use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::layout;
use crate::chatmode::{load_chat_mode, ChatModeFile, CHATMODE_SUFFIX};
use crate::form::{
    is_form_file, load_form, parse_chooser_config, FormFile, TemplateChooserConfig,
    CHOOSER_CONFIG_FILE,
};
use crate::instruction::{load_instruction, InstructionFile, INSTRUCTION_SUFFIX};
use crate::prompt::{load_prompt, PromptFile, PROMPT_SUFFIX};

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Bundle root '{0}' does not exist")]
    RootNotFound(String),
}

/// One file that failed to parse or validate during a bundle load
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
}

/// The template-chooser config together with its on-disk location
#[derive(Debug, Clone)]
pub struct ChooserFile {
    pub path: PathBuf,
    pub config: TemplateChooserConfig,
}

/// Every successfully loaded artifact of a bundle, each group ordered by
/// file name
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub instructions: Vec<InstructionFile>,
    pub chat_modes: Vec<ChatModeFile>,
    pub prompts: Vec<PromptFile>,
    pub forms: Vec<FormFile>,
    pub chooser: Option<ChooserFile>,
}

impl Bundle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifact_count() == 0
    }

    /// Total number of loaded artifact files
    #[must_use]
    pub fn artifact_count(&self) -> usize {
        self.instructions
            .len()
            .saturating_add(self.chat_modes.len())
            .saturating_add(self.prompts.len())
            .saturating_add(self.forms.len())
            .saturating_add(usize::from(self.chooser.is_some()))
    }

    /// Paths of every loaded artifact file
    #[must_use]
    pub fn artifact_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = Vec::new();
        paths.extend(self.instructions.iter().map(|i| i.path.as_path()));
        paths.extend(self.chat_modes.iter().map(|m| m.path.as_path()));
        paths.extend(self.prompts.iter().map(|p| p.path.as_path()));
        paths.extend(self.forms.iter().map(|f| f.path.as_path()));
        paths.extend(self.chooser.iter().map(|c| c.path.as_path()));
        paths
    }
}

/// Result of loading a bundle root: the artifacts that loaded, plus every
/// file that did not and why
#[derive(Debug, Default)]
pub struct BundleLoad {
    pub bundle: Bundle,
    pub diagnostics: Vec<Diagnostic>,
    /// Files inside group directories with unrecognized names
    pub skipped: Vec<PathBuf>,
}

impl BundleLoad {
    /// Whether every file in the bundle loaded cleanly
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Regular files under a directory, recursively, in sorted order
fn collect_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    paths.sort();
    paths
}

fn file_name_of(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("")
}

/// Load every artifact under a bundle root.
///
/// A missing group directory yields an empty group. Files that fail to parse
/// or validate become diagnostics; files with unrecognized names inside a
/// group directory are reported as skipped. The bundle itself never fails to
/// load for content reasons — only a missing root or an IO fault is an error.
pub async fn load_bundle(root: &Path) -> Result<BundleLoad, BundleError> {
    if !root.exists() {
        return Err(BundleError::RootNotFound(root.display().to_string()));
    }
    info!(root = %root.display(), "loading bundle");

    let mut out = BundleLoad::default();

    for path in collect_files(&layout::instructions_path(root)) {
        if file_name_of(&path).ends_with(INSTRUCTION_SUFFIX) {
            match load_instruction(&path).await {
                Ok(instruction) => out.bundle.instructions.push(instruction),
                Err(error) => out.diagnostics.push(Diagnostic {
                    path,
                    message: error.to_string(),
                }),
            }
        } else {
            out.skipped.push(path);
        }
    }

    for path in collect_files(&layout::chatmodes_path(root)) {
        if file_name_of(&path).ends_with(CHATMODE_SUFFIX) {
            match load_chat_mode(&path).await {
                Ok(chat_mode) => out.bundle.chat_modes.push(chat_mode),
                Err(error) => out.diagnostics.push(Diagnostic {
                    path,
                    message: error.to_string(),
                }),
            }
        } else {
            out.skipped.push(path);
        }
    }

    for path in collect_files(&layout::prompts_path(root)) {
        if file_name_of(&path).ends_with(PROMPT_SUFFIX) {
            match load_prompt(&path).await {
                Ok(prompt) => out.bundle.prompts.push(prompt),
                Err(error) => out.diagnostics.push(Diagnostic {
                    path,
                    message: error.to_string(),
                }),
            }
        } else {
            out.skipped.push(path);
        }
    }

    load_issue_templates(root, &mut out).await?;

    out.bundle.instructions.sort_by(|a, b| a.name.cmp(&b.name));
    out.bundle.chat_modes.sort_by(|a, b| a.name.cmp(&b.name));
    out.bundle.prompts.sort_by(|a, b| a.name.cmp(&b.name));
    out.bundle.forms.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        instructions = out.bundle.instructions.len(),
        chat_modes = out.bundle.chat_modes.len(),
        prompts = out.bundle.prompts.len(),
        forms = out.bundle.forms.len(),
        diagnostics = out.diagnostics.len(),
        skipped = out.skipped.len(),
        "bundle loaded"
    );

    Ok(out)
}

/// Load the `ISSUE_TEMPLATE/` group: form documents plus the chooser config
async fn load_issue_templates(root: &Path, out: &mut BundleLoad) -> Result<(), BundleError> {
    for path in collect_files(&layout::issue_template_path(root)) {
        if file_name_of(&path) == CHOOSER_CONFIG_FILE {
            let content = fs::read_to_string(&path).await?;
            match parse_chooser_config(&content) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded template chooser config");
                    out.bundle.chooser = Some(ChooserFile { path, config });
                }
                Err(error) => out.diagnostics.push(Diagnostic {
                    path,
                    message: error.to_string(),
                }),
            }
        } else if is_form_file(&path) {
            match load_form(&path).await {
                Ok(form) => out.bundle.forms.push(form),
                Err(error) => out.diagnostics.push(Diagnostic {
                    path,
                    message: error.to_string(),
                }),
            }
        } else {
            out.skipped.push(path);
        }
    }
    Ok(())
}
