mod atomic;
mod hash;

pub use atomic::atomic_write;
pub use hash::{compute_file_hash, compute_hash};

use std::path::Path;

/// The name of the manifest file written at the root of an installed bundle
pub const MANIFEST_FILE: &str = ".promptpack-manifest.json";

/// Current promptpack version
pub const PACK_VERSION: &str = "0.1.0";

/// Get the path to the manifest file inside a bundle root
#[must_use]
pub fn manifest_path(bundle_root: &Path) -> std::path::PathBuf {
    bundle_root.join(MANIFEST_FILE)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Normalize a relative path to forward slashes for use as a manifest key
#[must_use]
pub fn manifest_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
