use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

use crate::bundle::{load_bundle, BundleError};
use crate::manifest::{create_manifest, write_manifest, ManifestError, PackManifest};
use crate::utils::{compute_hash, manifest_key};

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Bundle error: {0}")]
    BundleError(#[from] BundleError),

    #[error("Source bundle has {0} invalid artifact(s); refusing to install")]
    InvalidBundle(usize),

    #[error("Source bundle has no artifacts")]
    EmptyBundle,

    #[error("Artifact '{0}' is outside the bundle root")]
    OutsideRoot(String),
}

/// Result of a successful install
#[derive(Debug, Clone)]
pub struct InstallResult {
    pub manifest: PackManifest,
    /// Bundle-relative paths of the copied files, in manifest-key form
    pub installed: Vec<String>,
}

/// Copy a validated bundle into a target configuration root.
///
/// The source is loaded and validated first; a bundle with any diagnostics is
/// refused outright rather than installed partially. Copied files keep the
/// directory convention, and a manifest with per-file SHA-256 digests is
/// written atomically at the target root.
pub async fn install_bundle(
    source_root: &Path,
    target_root: &Path,
) -> Result<InstallResult, InstallError> {
    let load = load_bundle(source_root).await?;
    if !load.is_clean() {
        return Err(InstallError::InvalidBundle(load.diagnostics.len()));
    }
    if load.bundle.is_empty() {
        return Err(InstallError::EmptyBundle);
    }

    fs::create_dir_all(target_root).await?;

    let mut files = BTreeMap::new();
    let mut installed = Vec::new();

    for path in load.bundle.artifact_paths() {
        let relative = path
            .strip_prefix(source_root)
            .ok()
            .ok_or_else(|| InstallError::OutsideRoot(path.display().to_string()))?;
        let target_path = target_root.join(relative);

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = fs::read(path).await?;
        fs::write(&target_path, &content).await?;

        let key = manifest_key(relative);
        debug!(file = %key, "installed artifact");
        files.insert(key.clone(), compute_hash(&content));
        installed.push(key);
    }

    let manifest = create_manifest(files);
    write_manifest(target_root, &manifest).await?;

    info!(
        source = %source_root.display(),
        target = %target_root.display(),
        files = installed.len(),
        "bundle installed"
    );

    Ok(InstallResult { manifest, installed })
}
