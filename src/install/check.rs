use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::manifest::{read_manifest, ManifestError};
use crate::utils::compute_file_hash;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("No manifest found at '{0}'; bundle is not installed")]
    NotInstalled(String),
}

/// State of one installed file relative to its manifest digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// Content matches the digest recorded at install time
    Unchanged,
    /// Content differs from the recorded digest
    Modified,
    /// File no longer exists
    Missing,
}

/// Per-file result of an install check
#[derive(Debug, Clone)]
pub struct FileCheck {
    /// Bundle-relative path in manifest-key form
    pub path: String,
    pub state: InstallState,
}

/// Result of checking an installed bundle against its manifest
#[derive(Debug, Clone, Default)]
pub struct InstallStatus {
    pub checks: Vec<FileCheck>,
}

impl InstallStatus {
    /// Whether every installed file still matches its recorded digest
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.checks
            .iter()
            .all(|check| check.state == InstallState::Unchanged)
    }

    /// Paths whose state is not [`InstallState::Unchanged`]
    #[must_use]
    pub fn dirty_paths(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|check| check.state != InstallState::Unchanged)
            .map(|check| check.path.as_str())
            .collect()
    }
}

/// Resolve a manifest key back to a path under the install root
fn target_file(root: &Path, key: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in key.split('/') {
        path.push(segment);
    }
    path
}

/// Re-hash every installed file against the manifest.
///
/// Reports each file as unchanged, locally modified, or missing, in manifest
/// (sorted) order. Installed bundles are read-only data per the consuming
/// platforms' contract; anything dirty here means that contract was broken.
pub async fn check_install(target_root: &Path) -> Result<InstallStatus, CheckError> {
    let manifest = read_manifest(target_root)
        .await?
        .ok_or_else(|| CheckError::NotInstalled(target_root.display().to_string()))?;

    let mut checks = Vec::new();
    for (key, digest) in &manifest.files {
        let path = target_file(target_root, key);
        let state = if path.exists() {
            let current = compute_file_hash(&path).await?;
            if current == *digest {
                InstallState::Unchanged
            } else {
                InstallState::Modified
            }
        } else {
            InstallState::Missing
        };

        debug!(file = %key, ?state, "checked installed file");
        checks.push(FileCheck {
            path: key.clone(),
            state,
        });
    }

    Ok(InstallStatus { checks })
}
