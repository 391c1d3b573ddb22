mod types;

pub use types::PackManifest;

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::utils::{atomic_write, manifest_path, now_iso, PACK_VERSION};

/// Manifest schema version written by this crate
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read the manifest from an installed bundle root
pub async fn read_manifest(bundle_root: &Path) -> Result<Option<PackManifest>, ManifestError> {
    let path = manifest_path(bundle_root);

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).await?;
    let manifest: PackManifest = serde_json::from_str(&content)?;
    Ok(Some(manifest))
}

/// Write the manifest to a bundle root, atomically
pub async fn write_manifest(
    bundle_root: &Path,
    manifest: &PackManifest,
) -> Result<(), ManifestError> {
    let path = manifest_path(bundle_root);
    let content = serde_json::to_string_pretty(manifest)?;
    atomic_write(&path, &content).await?;
    Ok(())
}

/// Create a fresh manifest for the given file digests
#[must_use]
pub fn create_manifest(files: BTreeMap<String, String>) -> PackManifest {
    let now = now_iso();
    PackManifest {
        schema_version: MANIFEST_SCHEMA_VERSION,
        pack_version: PACK_VERSION.to_string(),
        created_at: now.clone(),
        updated_at: now,
        files,
    }
}

/// Update the manifest timestamp
pub fn update_manifest_timestamp(manifest: &mut PackManifest) {
    manifest.updated_at = now_iso();
}
